//! Renders one still frame of a textured first-person view of a tile map.

pub mod config;
pub mod core;
pub mod error;
pub mod render;

pub use crate::config::RenderConfig;
pub use crate::core::maze::{Tile, TileMap, WallId};
pub use crate::core::player::Player;
pub use crate::render::color::Color;
pub use crate::render::framebuffer::Framebuffer;
pub use crate::render::render3d::{FrameStats, render_frame};
pub use crate::render::textures::TextureAtlas;
