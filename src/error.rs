//! Error types for asset loading, map parsing, configuration and output.

use std::path::PathBuf;

/// Errors from loading or building a texture atlas.
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("can not load the textures from {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("the texture must be a 32 bit image, got {0} channel(s)")]
    ChannelCount(u8),
    #[error(
        "the texture file must contain N square textures packed horizontally, got {width}x{height}"
    )]
    NotSquareStrip { width: u32, height: u32 },
    #[error("atlas of {width}x{height} needs {expected} pixels, got {actual}")]
    PixelCount {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Errors from building or querying a tile map.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map of {width}x{height} needs {expected} tiles, got {actual}")]
    SizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("invalid tile {ch:?} at ({col}, {row})")]
    InvalidTile { ch: char, col: usize, row: usize },
    #[error("tile ({col}, {row}) is outside the {width}x{height} map")]
    OutOfBounds {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },
    #[error("wall at ({col}, {row}) uses texture {id}, atlas only has {count}")]
    TextureOutOfRange {
        id: u8,
        col: usize,
        row: usize,
        count: usize,
    },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("marching step must be in (0, 1) cell, got {0}")]
    StepOutOfRange(f32),
    #[error("{name} must be positive, got {value}")]
    NonPositiveDepth { name: &'static str, value: f32 },
    #[error("min_depth must be at least {floor}, got {value}")]
    MinDepthTooSmall { floor: f32, value: f32 },
    #[error("window of {width}x{height} leaves no room for the 3D view")]
    EmptyView { width: usize, height: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Precondition failures detected before a frame is rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error("framebuffer is {actual:?}, the configured window is {expected:?}")]
    FrameSize {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}
