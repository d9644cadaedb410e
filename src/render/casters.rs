use glam::Vec2;
use tracing::trace;

use crate::config::RenderConfig;
use crate::core::maze::{Tile, TileMap, WallId};
use crate::core::player::Player;

/// Which kind of grid line the ray crossed to enter the wall cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    /// A line of constant x; the texture runs along y.
    Vertical,
    /// A line of constant y; the texture runs along x.
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersect {
    /// Straight-line distance from the camera to the hit, in cells.
    pub distance: f32,
    pub impact: WallId,
    pub hit: Vec2,
    pub face: Face,
    /// Position along the wall face, in `[0, 1)`.
    pub tx: f32,
}

/// Marches one ray. Returns `None` when it runs past `max_depth` or leaves the map.
pub fn cast_ray(maze: &TileMap, player: &Player, a: f32, cfg: &RenderConfig) -> Option<Intersect> {
    march(maze, player.pos, a, cfg, |_| {})
}

/// Like [`cast_ray`], calling `on_step` with every sampled point inside the map.
pub fn march<F: FnMut(Vec2)>(
    maze: &TileMap,
    origin: Vec2,
    a: f32,
    cfg: &RenderConfig,
    mut on_step: F,
) -> Option<Intersect> {
    let dir = Vec2::new(a.cos(), a.sin());

    // Integer step count keeps sample positions independent of float accumulation.
    let mut k: u32 = 0;
    loop {
        let t = k as f32 * cfg.step;
        if t >= cfg.max_depth {
            trace!(a, "ray reached max depth");
            return None;
        }
        let p = origin + dir * t;
        // Off-grid samples end the ray without being reported.
        let tile = maze.tile_at_point(p.x, p.y)?;
        on_step(p);

        match tile {
            Tile::Empty => k += 1,
            Tile::Wall(id) => {
                let (distance, impact) = if k == 0 {
                    (0.0, id)
                } else {
                    refine(maze, origin, dir, t - cfg.step, t, id, cfg.refine_iterations)
                };
                let hit = origin + dir * distance;
                let (face, tx) = face_at(hit);
                return Some(Intersect { distance, impact, hit, face, tx });
            }
        }
    }
}

/// Bisects `[lo, hi]` (empty at `lo`, wall at `hi`) towards the wall boundary.
fn refine(
    maze: &TileMap,
    origin: Vec2,
    dir: Vec2,
    mut lo: f32,
    mut hi: f32,
    mut impact: WallId,
    iterations: u32,
) -> (f32, WallId) {
    for _ in 0..iterations {
        let mid = 0.5 * (lo + hi);
        let p = origin + dir * mid;
        match maze.tile_at_point(p.x, p.y) {
            Some(Tile::Wall(id)) => {
                hi = mid;
                impact = id;
            }
            _ => lo = mid,
        }
    }
    (hi, impact)
}

/// The axis whose coordinate sits closest to a grid line was the one crossed.
/// Exact ties go to the vertical face.
fn face_at(hit: Vec2) -> (Face, f32) {
    let dx = (hit.x - hit.x.round()).abs();
    let dy = (hit.y - hit.y.round()).abs();
    if dx <= dy {
        (Face::Vertical, hit.y - hit.y.floor())
    } else {
        (Face::Horizontal, hit.x - hit.x.floor())
    }
}
