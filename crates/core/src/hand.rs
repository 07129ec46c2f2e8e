use crate::{Tile, HAND_CAPACITY, WINNING_RUN};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HandError {
    #[error("hand already holds the maximum of 15 tiles")]
    CapacityExceeded,
    #[error("no tile at index {index} (hand holds {len})")]
    InvalidIndex { index: usize, len: usize },
}

/// Result of one pass of the run scanner over a hand's slots.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunScan {
    pub longest: usize,
    pub middle: f64,
}

/// Walks every adjacent slot pair of a full-capacity hand.
///
/// A step counts when the left value is exactly one more than the right one.
/// Equal neighbours leave the streak untouched; anything else, including a
/// pair that reaches into an unfilled slot, resets the streak to 1. The
/// returned length counts steps, not tiles.
///
/// `middle` follows the best streak: a new maximum replaces it with
/// `streak / 2 + i`, a tie adds `streak / 2 + i` to it.
pub fn scan_runs(slots: &[Tile]) -> RunScan {
    let mut scan = RunScan::default();
    let mut streak = 0usize;
    for i in 0..HAND_CAPACITY - 1 {
        let (Some(left), Some(right)) = (slots.get(i), slots.get(i + 1)) else {
            streak = 1;
            continue;
        };
        let (left, right) = (left.value(), right.value());
        if left == right + 1 {
            streak += 1;
            let centre = streak as f64 / 2.0 + i as f64;
            if streak > scan.longest {
                scan.longest = streak;
                scan.middle = centre;
            } else if streak == scan.longest {
                scan.middle += centre;
            }
        } else if left != right {
            streak = 1;
        }
    }
    scan
}

/// A player's tiles, kept sorted ascending by value.
///
/// Slots at `len()..HAND_CAPACITY` are unfilled and never read as tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            tiles: Vec::with_capacity(HAND_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tiles.len() >= HAND_CAPACITY
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn values(&self) -> Vec<u8> {
        self.tiles.iter().map(|tile| tile.value()).collect()
    }

    /// Inserts ahead of the first strictly greater tile and returns the slot
    /// it landed in.
    pub fn insert(&mut self, tile: Tile) -> Result<usize, HandError> {
        if self.is_full() {
            return Err(HandError::CapacityExceeded);
        }
        let index = self
            .tiles
            .iter()
            .position(|held| held.value() > tile.value())
            .unwrap_or(self.tiles.len());
        self.tiles.insert(index, tile);
        Ok(index)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Tile, HandError> {
        if index >= self.tiles.len() {
            return Err(HandError::InvalidIndex {
                index,
                len: self.tiles.len(),
            });
        }
        Ok(self.tiles.remove(index))
    }

    /// Last slot holding a tile of the same value.
    pub fn find_index_of(&self, tile: Tile) -> Option<usize> {
        self.tiles.iter().rposition(|held| held.matches(tile))
    }

    /// First `i` where slots `i` and `i + 1` hold equal values.
    pub fn first_duplicate_index(&self) -> Option<usize> {
        self.tiles
            .windows(2)
            .position(|pair| pair[0].value() == pair[1].value())
    }

    pub fn longest_run_length(&self) -> usize {
        scan_runs(&self.tiles).longest
    }

    pub fn middle_of_longest_run(&self) -> f64 {
        scan_runs(&self.tiles).middle
    }

    pub fn has_winning_run(&self) -> bool {
        self.longest_run_length() >= WINNING_RUN
    }
}
