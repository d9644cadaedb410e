//! First-person view: one textured wall column per ray, drawn in the right half of the frame.

use tracing::{debug, info, trace};

use crate::config::RenderConfig;
use crate::core::maze::TileMap;
use crate::core::player::Player;
use crate::error::RenderError;
use crate::render::casters::{Intersect, march};
use crate::render::framebuffer::Framebuffer;
use crate::render::minimap::MapPreview;
use crate::render::textures::TextureAtlas;

/// Per-frame hit counts, logged after a render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub hits: usize,
    pub misses: usize,
}

/// Wall height in pixels before rounding.
///
/// The ray length is projected onto the view axis so flat walls stay flat, and
/// floored at `min_depth` so a camera standing in a wall gets a finite column.
#[inline]
pub fn projected_height(
    distance: f32,
    ray_angle: f32,
    player_a: f32,
    view_height: usize,
    min_depth: f32,
) -> f32 {
    let corrected = (distance * (ray_angle - player_a).cos()).max(min_depth);
    view_height as f32 / corrected
}

/// Tallest column, in screen heights. Anything taller is clipped away anyway.
pub const MAX_HEIGHT_SCALE: usize = 1024;

/// Integer column height, between 1 and `MAX_HEIGHT_SCALE` screen heights.
#[inline]
pub fn column_height(
    distance: f32,
    ray_angle: f32,
    player_a: f32,
    view_height: usize,
    min_depth: f32,
) -> usize {
    let h = projected_height(distance, ray_angle, player_a, view_height, min_depth);
    (h as usize).clamp(1, view_height.saturating_mul(MAX_HEIGHT_SCALE).max(1))
}

/// Texel column for an offset `u` along the wall face.
#[inline]
pub fn texture_column(u: f32, size: usize) -> usize {
    ((u.clamp(0.0, 1.0) * size as f32) as usize).min(size - 1)
}

/// Texel row for pixel `y_rel` (from the column's unclipped top) of a `height` pixel column.
#[inline]
pub fn texture_row(y_rel: usize, height: usize, size: usize) -> usize {
    (y_rel * size / height.max(1)).min(size - 1)
}

/// Draws the wall slice for view column `i`, vertically centred and clipped to the frame.
pub fn draw_column(
    fb: &mut Framebuffer,
    atlas: &TextureAtlas,
    cfg: &RenderConfig,
    i: usize,
    intersect: &Intersect,
    height: usize,
) {
    let size = atlas.texture_size();
    let tex = intersect.impact.index();
    let tx = texture_column(intersect.tx, size);
    let x = cfg.view_x0() + i;

    let top = (cfg.window_height as isize - height as isize) / 2;
    let y0 = top.max(0) as usize;
    let y1 = (top + height as isize).clamp(0, cfg.window_height as isize) as usize;
    for y in y0..y1 {
        let ty = texture_row((y as isize - top) as usize, height, size);
        fb.set_pixel_color(x, y, atlas.get_pixel_color(tex, tx, ty));
    }
}

/// Casts one ray per view column and composites the textured walls.
///
/// When `preview` is set, every ray sample is also marked on the map preview.
pub fn render_3d(
    fb: &mut Framebuffer,
    maze: &TileMap,
    player: &Player,
    atlas: &TextureAtlas,
    cfg: &RenderConfig,
    preview: Option<&MapPreview>,
) -> FrameStats {
    let columns = cfg.view_width();
    let mut stats = FrameStats::default();

    for i in 0..columns {
        let ray_a = player.ray_angle(i, columns);
        let intersect = match preview {
            Some(pv) => march(maze, player.pos, ray_a, cfg, |p| pv.plot(fb, p)),
            None => march(maze, player.pos, ray_a, cfg, |_| {}),
        };
        let Some(intersect) = intersect else {
            stats.misses += 1;
            continue;
        };
        stats.hits += 1;

        let height = column_height(
            intersect.distance,
            ray_a,
            player.a,
            cfg.window_height,
            cfg.min_depth,
        );
        trace!(i, distance = intersect.distance, height, wall = ?intersect.impact, "column");
        draw_column(fb, atlas, cfg, i, &intersect, height);
    }

    debug!(hits = stats.hits, misses = stats.misses, "3D view rendered");
    stats
}

/// Checks every precondition, then draws the map preview and the 3D view into `fb`.
pub fn render_frame(
    fb: &mut Framebuffer,
    maze: &TileMap,
    player: &Player,
    atlas: &TextureAtlas,
    cfg: &RenderConfig,
) -> Result<FrameStats, RenderError> {
    cfg.validate()?;
    maze.validate_textures(atlas.texture_count())?;
    if (fb.width, fb.height) != (cfg.window_width, cfg.window_height) {
        return Err(RenderError::FrameSize {
            expected: (cfg.window_width, cfg.window_height),
            actual: (fb.width, fb.height),
        });
    }

    info!(
        x = player.pos.x,
        y = player.pos.y,
        angle = player.a,
        fov = player.fov,
        "rendering frame"
    );
    let preview = MapPreview::fit(cfg.window_width, cfg.window_height, maze);
    preview.render_maze(fb, maze, atlas);
    Ok(render_3d(fb, maze, player, atlas, cfg, Some(&preview)))
}
