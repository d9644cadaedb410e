//! Rendering: framebuffer, textures, ray casting and the column renderer.
//!
//! - `color`: packed RGBA value type
//! - `framebuffer`: CPU framebuffer and PPM output
//! - `textures`: wall texture atlas
//! - `casters`: ray marching and wall hit detection
//! - `render3d`: perspective columns and texture mapping
//! - `minimap`: top-down map preview

pub mod color;
pub mod framebuffer;
pub mod textures;
pub mod casters;
pub mod render3d;
pub mod minimap;
