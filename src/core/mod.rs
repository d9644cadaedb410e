//! Scene data: the tile map and the camera.
//!
//! - `maze`: tile grid parsing and bounds-checked lookups
//! - `player`: camera pose and per-column ray angles

pub mod maze;
pub mod player;
