//! World map - immutable tile grid with bounds-aware probes.
//!
//! Cells are stored x-major: cell `(x, y)` lives at flat index
//! `x * height + y`, so each text row of a map source string is one x
//! slice. The convention is fixed for the whole system; every sampler
//! (collision, ray casting) goes through [`WorldMap::tile`].

use thiserror::Error;

use crate::types::Tile;

/// Errors rejected at map load time, before the game loop starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map source is {found} cells, expected {expected} ({width}x{height})")]
    WrongLength {
        width: usize,
        height: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid map character {ch:?} at index {index} (alphabet is '#' and '.')")]
    InvalidTile { ch: char, index: usize },
}

/// Immutable 2D grid of wall/empty cells.
#[derive(Debug, Clone)]
pub struct WorldMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

/// The 16x16 maze the game ships with.
const REFERENCE_MAP: &str = concat!(
    "#########.......",
    "#...............",
    "#.......########",
    "#..............#",
    "#......##......#",
    "#......##......#",
    "#..............#",
    "###............#",
    "##.............#",
    "#......####..###",
    "#......#.......#",
    "#......#.......#",
    "#..............#",
    "#......#########",
    "#...............",
    "################",
);

impl WorldMap {
    /// Parse a `width * height` map from a flat string over `{'#','.'}`.
    ///
    /// Wrong length or an invalid character is a configuration error; the
    /// caller is expected to treat it as fatal.
    pub fn parse(width: usize, height: usize, source: &str) -> Result<Self, MapError> {
        let expected = width * height;
        let found = source.chars().count();
        if found != expected {
            return Err(MapError::WrongLength {
                width,
                height,
                expected,
                found,
            });
        }

        let mut tiles = Vec::with_capacity(expected);
        for (index, ch) in source.chars().enumerate() {
            match Tile::from_char(ch) {
                Some(tile) => tiles.push(tile),
                None => return Err(MapError::InvalidTile { ch, index }),
            }
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// The built-in 16x16 maze.
    pub fn reference() -> Self {
        // The baked-in literal is known-good; parse still runs so the
        // alphabet check has a single source of truth.
        Self::parse(16, 16, REFERENCE_MAP).expect("reference map literal is valid")
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Probe a cell. `None` means out of bounds, a distinct case that
    /// movement and ray casting treat as wall-equivalent.
    pub fn tile(&self, x: i64, y: i64) -> Option<Tile> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.tiles[x as usize * self.height + y as usize])
    }

    /// Whether the cell containing the real-valued position blocks
    /// movement: a wall, or outside the map entirely.
    pub fn blocks(&self, x: f64, y: f64) -> bool {
        match self.tile(x.floor() as i64, y.floor() as i64) {
            Some(tile) => tile.is_wall(),
            None => true,
        }
    }
}
