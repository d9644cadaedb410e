//! Wall texture atlas: `count` square textures packed side by side in one image.

use std::path::Path;

use image::GenericImageView;
use tracing::info;

use crate::error::AtlasError;
use crate::render::color::Color;

#[derive(Clone, Debug)]
pub struct TextureAtlas {
    /// Row-major, `width = count * size`, `height = size`.
    px: Vec<Color>,
    size: usize,
    count: usize,
}

impl TextureAtlas {
    /// Decodes an RGBA image from disk. Anything other than 4 channels is rejected.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AtlasError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| AtlasError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let channels = img.color().channel_count();
        if channels != 4 {
            return Err(AtlasError::ChannelCount(channels));
        }

        let (w, h) = img.dimensions();
        let px = img.to_rgba8().pixels().map(|p| Color::from(p.0)).collect();
        let atlas = Self::from_pixels(w, h, px)?;
        info!(
            path = %path.display(),
            count = atlas.count,
            size = atlas.size,
            "loaded wall textures"
        );
        Ok(atlas)
    }

    pub fn from_pixels(width: u32, height: u32, px: Vec<Color>) -> Result<Self, AtlasError> {
        if height == 0 || width == 0 || width % height != 0 {
            return Err(AtlasError::NotSquareStrip { width, height });
        }
        let expected = width as usize * height as usize;
        if px.len() != expected {
            return Err(AtlasError::PixelCount {
                width,
                height,
                expected,
                actual: px.len(),
            });
        }
        Ok(Self {
            px,
            size: height as usize,
            count: (width / height) as usize,
        })
    }

    /// Procedural atlas: one checkerboard per texture, tinted by its index.
    pub fn checker(count: usize, size: usize) -> Self {
        let width = count * size;
        let mut px = Vec::with_capacity(width * size);
        let cell = (size / 8).max(1);
        for y in 0..size {
            for x in 0..width {
                let id = x / size;
                let base = Self::color_from_index(id);
                let lx = x % size;
                px.push(if ((lx / cell) + (y / cell)) % 2 == 0 {
                    base
                } else {
                    Self::mix(base, Color::WHITE, 64)
                });
            }
        }
        Self { px, size, count }
    }

    fn color_from_index(i: usize) -> Color {
        let k = i as u32 + '0' as u32;
        let r = ((k * 97) % 200 + 40) as u8;
        let g = ((k * 57) % 200 + 40) as u8;
        let b = ((k * 31) % 200 + 40) as u8;
        Color::rgb(r, g, b)
    }

    #[inline]
    fn mix(a: Color, b: Color, t: u8) -> Color {
        let ta = t as u16;
        let na = 255u16 - ta;
        let mixc = |x: u8, y: u8| -> u8 { (((x as u16) * na + (y as u16) * ta) / 255) as u8 };
        Color::new(mixc(a.r(), b.r()), mixc(a.g(), b.g()), mixc(a.b(), b.b()), mixc(a.a(), b.a()))
    }

    #[inline] pub fn texture_count(&self) -> usize { self.count }
    #[inline] pub fn texture_size(&self) -> usize { self.size }

    /// Texel `(tx, ty)` of texture `id`.
    ///
    /// Panics if `id`, `tx` or `ty` is out of range: maps are checked against the
    /// atlas before rendering, so a bad index here is a bug.
    #[inline]
    pub fn get_pixel_color(&self, id: usize, tx: usize, ty: usize) -> Color {
        assert!(
            id < self.count && tx < self.size && ty < self.size,
            "texel ({tx}, {ty}) of texture {id} is outside a {}x{} atlas of {} textures",
            self.size,
            self.size,
            self.count
        );
        self.px[ty * self.count * self.size + id * self.size + tx]
    }

    /// Top-left texel, used to paint a texture's tiles on the map preview.
    #[inline]
    pub fn swatch(&self, id: usize) -> Color {
        self.get_pixel_color(id, 0, 0)
    }
}
