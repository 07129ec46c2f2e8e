use crate::{MAX_TILE_VALUE, MIN_TILE_VALUE};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TileError {
    #[error("tile value {0} outside 1..=26")]
    InvalidValue(u8),
}

/// A numbered tile. There are no suits, so two tiles with the same value are
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tile {
    value: u8,
}

impl Tile {
    pub fn new(value: u8) -> Result<Self, TileError> {
        if !(MIN_TILE_VALUE..=MAX_TILE_VALUE).contains(&value) {
            return Err(TileError::InvalidValue(value));
        }
        Ok(Self { value })
    }

    /// For values already known to be in range, such as the deck builder's.
    pub(crate) const fn raw(value: u8) -> Self {
        Self { value }
    }

    pub fn value(self) -> u8 {
        self.value
    }

    pub fn matches(self, other: Tile) -> bool {
        self.value == other.value
    }
}

impl TryFrom<u8> for Tile {
    type Error = TileError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tile::new(value)
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> Self {
        tile.value
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
