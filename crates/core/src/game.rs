use crate::{
    Deck, DeckError, DrawSource, GameObserver, HandError, Outcome, Phase, Player, RngState,
    Tile, TileError,
};
use std::fmt;
use thiserror::Error;

mod decision;
mod setup;
mod turn;

pub use decision::{choose_discard_index, choose_draw_source, farther_end, select_winners};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("expected 4 seats, got {0}")]
    InvalidPlayerCount(usize),
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("seat {0} is not computer-controlled")]
    NotComputerSeat(usize),
    #[error("seat {0} is not played by a human")]
    NotHumanSeat(usize),
    #[error("game is already finished")]
    Finished,
    #[error("deck must be shuffled before dealing")]
    NotShuffled,
    #[error("hand error: {0}")]
    Hand(#[from] HandError),
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
    #[error("tile error: {0}")]
    Tile(#[from] TileError),
}

/// What one call to a turn command did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnReport {
    pub player: usize,
    pub drew: Option<(DrawSource, Tile)>,
    pub discarded: Option<Tile>,
    pub outcome: Option<Outcome>,
}

/// One game from deal to result. The driver owns it and calls the turn
/// commands in order; every command either applies fully or returns an error
/// without touching state.
pub struct Game {
    players: Vec<Player>,
    deck: Deck,
    rng: RngState,
    phase: Phase,
    current: usize,
    turn: u32,
    outcome: Option<Outcome>,
    observer: Box<dyn GameObserver>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("deck", &self.deck)
            .field("phase", &self.phase)
            .field("current", &self.current)
            .field("turn", &self.turn)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}
