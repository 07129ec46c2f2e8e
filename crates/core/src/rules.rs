//! Fixed rule constants for the jokerless four-player game.

pub const MIN_TILE_VALUE: u8 = 1;
pub const MAX_TILE_VALUE: u8 = 26;
pub const COPIES_PER_VALUE: usize = 4;
pub const TOTAL_TILES: usize = MAX_TILE_VALUE as usize * COPIES_PER_VALUE;

pub const PLAYER_COUNT: usize = 4;
pub const HAND_CAPACITY: usize = 15;
pub const OPENING_HAND: usize = 14;
/// Seat dealt one extra tile; it opens the game by discarding.
pub const DEALER_SEAT: usize = 0;

/// Run length (in pairwise steps) that wins outright.
pub const WINNING_RUN: usize = 14;
