//! Frame layout and ray marching constants.

use crate::error::ConfigError;
use crate::render::color::Color;

pub const WINDOW_WIDTH: usize = 1024;
pub const WINDOW_HEIGHT: usize = 512;

/// Smallest accepted `min_depth`, in cells.
pub const MIN_DEPTH_FLOOR: f32 = 1e-4;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Full frame width; the left half is the map preview, the right half the 3D view.
    pub window_width: usize,
    pub window_height: usize,
    /// Marching step in map cells. Must stay below one cell or rays tunnel through walls.
    pub step: f32,
    /// Rays that travel this far without a hit draw no wall.
    pub max_depth: f32,
    /// Floor for the corrected depth, keeps column heights finite inside walls.
    pub min_depth: f32,
    /// Bisection passes used to pin the wall boundary after a hit.
    pub refine_iterations: u32,
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            step: 0.01,
            max_depth: 20.0,
            min_depth: 0.01,
            refine_iterations: 16,
            background: Color::WHITE,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step > 0.0 && self.step < 1.0) {
            return Err(ConfigError::StepOutOfRange(self.step));
        }
        for (name, value) in [("max_depth", self.max_depth), ("min_depth", self.min_depth)] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveDepth { name, value });
            }
        }
        if self.min_depth < MIN_DEPTH_FLOOR {
            return Err(ConfigError::MinDepthTooSmall {
                floor: MIN_DEPTH_FLOOR,
                value: self.min_depth,
            });
        }
        if self.view_width() == 0 || self.window_height == 0 {
            return Err(ConfigError::EmptyView {
                width: self.window_width,
                height: self.window_height,
            });
        }
        Ok(())
    }

    /// Number of first-person columns, one ray each.
    #[inline]
    pub fn view_width(&self) -> usize {
        self.window_width / 2
    }

    /// Framebuffer column of the first 3D view column.
    #[inline]
    pub fn view_x0(&self) -> usize {
        self.window_width / 2
    }
}
