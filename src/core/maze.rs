//! Tile map: a fixed grid of empty cells and textured walls.

use crate::error::MapError;

/// Index of a wall texture in the atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallId(pub u8);

impl WallId {
    /// Walls are written as `'0'`, `'1'`, ... ; the offset from `'0'` is the texture index.
    pub const BASE: char = '0';

    pub fn from_char(ch: char) -> Option<Self> {
        let offset = (ch as u32).checked_sub(Self::BASE as u32)?;
        u8::try_from(offset).ok().map(WallId)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        char::from_u32(Self::BASE as u32 + self.0 as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Wall(WallId),
}

impl Tile {
    #[inline]
    pub fn wall(self) -> Option<WallId> {
        match self {
            Tile::Empty => None,
            Tile::Wall(id) => Some(id),
        }
    }
}

pub const DEFAULT_MAP_WIDTH: usize = 16;
pub const DEFAULT_MAP_HEIGHT: usize = 16;

pub const DEFAULT_MAP: &str = concat!(
    "0000222222220000",
    "1              0",
    "1      11111   0",
    "1     0        0",
    "0     0  1110000",
    "0     3        0",
    "0   10000      0",
    "0   3   11100  0",
    "5   4   0      0",
    "5   4   1  00000",
    "0       1      0",
    "2       1      0",
    "0       0      0",
    "0 0000000      0",
    "0              0",
    "0002222222200000",
);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
}

impl TileMap {
    /// Parses `width * height` chars, row-major. `' '` is empty, anything else a wall.
    pub fn parse(width: usize, height: usize, chars: &str) -> Result<Self, MapError> {
        let expected = width * height;
        let actual = chars.chars().count();
        if actual != expected {
            return Err(MapError::SizeMismatch { width, height, expected, actual });
        }

        let tiles = chars
            .chars()
            .enumerate()
            .map(|(i, ch)| match ch {
                ' ' => Ok(Tile::Empty),
                _ => WallId::from_char(ch).map(Tile::Wall).ok_or(MapError::InvalidTile {
                    ch,
                    col: i % width,
                    row: i / width,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tiles, width, height })
    }

    pub fn default_map() -> Result<Self, MapError> {
        Self::parse(DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT, DEFAULT_MAP)
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }

    pub fn tile_at(&self, col: usize, row: usize) -> Result<Tile, MapError> {
        if col >= self.width || row >= self.height {
            return Err(MapError::OutOfBounds {
                col,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.tiles[row * self.width + col])
    }

    /// `None` for empty cells, the wall's texture id otherwise.
    pub fn tile_kind_at(&self, col: usize, row: usize) -> Result<Option<WallId>, MapError> {
        self.tile_at(col, row).map(Tile::wall)
    }

    /// Tile containing the real-valued point `(x, y)`, `None` off the grid.
    #[inline]
    pub fn tile_at_point(&self, x: f32, y: f32) -> Option<Tile> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let (col, row) = (x.floor() as usize, y.floor() as usize);
        self.tile_at(col, row).ok()
    }

    /// Iterates `(col, row, id)` for every wall tile.
    pub fn walls(&self) -> impl Iterator<Item = (usize, usize, WallId)> + '_ {
        self.tiles.iter().enumerate().filter_map(move |(i, t)| {
            t.wall().map(|id| (i % self.width, i / self.width, id))
        })
    }

    /// Every wall must name a texture the atlas actually has.
    pub fn validate_textures(&self, texture_count: usize) -> Result<(), MapError> {
        match self.walls().find(|&(_, _, id)| id.index() >= texture_count) {
            Some((col, row, id)) => Err(MapError::TextureOutOfRange {
                id: id.0,
                col,
                row,
                count: texture_count,
            }),
            None => Ok(()),
        }
    }
}
