use glam::Vec2;

/// The camera for one frame: position in map cells, yaw and field of view in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub a: f32,
    pub fov: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            a: angle,
            fov: std::f32::consts::FRAC_PI_3, // 60°
        }
    }

    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Angle of the ray for view column `i` of `columns`, sweeping left to right.
    #[inline]
    pub fn ray_angle(&self, i: usize, columns: usize) -> f32 {
        self.a - self.fov / 2.0 + self.fov * i as f32 / columns as f32
    }
}
