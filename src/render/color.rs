//! Packed RGBA colour.
//!
//! The word layout is `r | g << 8 | b << 16 | a << 24`, which is also the
//! byte order of an RGBA8 image in memory on little-endian targets.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Ray paths on the map preview.
    pub const RAY_GRAY: Color = Color::rgb(160, 160, 160);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color((a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32)
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[inline] pub const fn from_u32(word: u32) -> Self { Color(word) }
    #[inline] pub const fn to_u32(self) -> u32 { self.0 }

    #[inline] pub const fn r(self) -> u8 { self.0 as u8 }
    #[inline] pub const fn g(self) -> u8 { (self.0 >> 8) as u8 }
    #[inline] pub const fn b(self) -> u8 { (self.0 >> 16) as u8 }
    #[inline] pub const fn a(self) -> u8 { (self.0 >> 24) as u8 }

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }
}

impl From<[u8; 4]> for Color {
    fn from(px: [u8; 4]) -> Self {
        Color::new(px[0], px[1], px[2], px[3])
    }
}
