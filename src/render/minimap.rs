//! Top-down map preview drawn in the left half of the frame.

use glam::Vec2;

use crate::core::maze::TileMap;
use crate::render::color::Color;
use crate::render::framebuffer::Framebuffer;
use crate::render::textures::TextureAtlas;

/// Pixel size of one map cell on the preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapPreview {
    pub cell_w: usize,
    pub cell_h: usize,
}

impl MapPreview {
    /// Fits the whole map into the left half of a `window_width × window_height` frame.
    pub fn fit(window_width: usize, window_height: usize, maze: &TileMap) -> Self {
        Self {
            cell_w: window_width / (maze.width() * 2).max(1),
            cell_h: window_height / maze.height().max(1),
        }
    }

    /// Wall cells as flat rectangles in their texture's swatch colour.
    pub fn render_maze(&self, fb: &mut Framebuffer, maze: &TileMap, atlas: &TextureAtlas) {
        for (col, row, id) in maze.walls() {
            fb.fill_rect(
                col * self.cell_w,
                row * self.cell_h,
                self.cell_w,
                self.cell_h,
                atlas.swatch(id.index()),
            );
        }
    }

    /// Marks one ray sample given in map cells.
    #[inline]
    pub fn plot(&self, fb: &mut Framebuffer, p: Vec2) {
        let x = (p.x * self.cell_w as f32) as usize;
        let y = (p.y * self.cell_h as f32) as usize;
        fb.set_pixel_color(x, y, Color::RAY_GRAY);
    }
}
