//! CPU framebuffer: rectangle fills, per-pixel writes and PPM output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::FrameError;
use crate::render::color::Color;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    /// Every pixel starts out as `background`, so the buffer is never partially written.
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self {
            color_buffer: vec![background; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn set_pixel_color(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            self.color_buffer[y * self.width + x] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            return Some(self.color_buffer[y * self.width + x]);
        }
        None
    }

    /// Fills `w × h` pixels from `(x, y)`. Anything past the right or bottom edge is skipped.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Color) {
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);
        if x >= x1 || y >= y1 {
            return;
        }
        for row in y..y1 {
            let start = row * self.width;
            self.color_buffer[start + x..start + x1].fill(color);
        }
    }

    /// Binary PPM (`P6`), alpha dropped.
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let mut row = Vec::with_capacity(self.width * 3);
        for line in self.color_buffer.chunks(self.width.max(1)) {
            row.clear();
            for c in line {
                row.extend_from_slice(&[c.r(), c.g(), c.b()]);
            }
            out.write_all(&row)?;
        }
        out.flush()
    }

    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> Result<(), FrameError> {
        let path = path.as_ref();
        let io_err = |source| FrameError::Io { path: path.to_path_buf(), source };
        let file = File::create(path).map_err(io_err)?;
        self.write_ppm(BufWriter::new(file)).map_err(io_err)
    }
}
