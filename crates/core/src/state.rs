use crate::{Hand, PlayerKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Before the deal; the stack may still be shuffled.
    Setup,
    /// Current player holds 14 tiles and must pick one up.
    Draw,
    /// Current player holds 15 tiles and must throw one away.
    Discard,
    /// Discard done, waiting for the turn to pass.
    TurnOver,
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub kind: PlayerKind,
    pub hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            hand: Hand::new(),
        }
    }

    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Winner { player: usize, run_length: usize },
    StackExhausted {
        winners: Vec<usize>,
        run_length: usize,
    },
}

impl Outcome {
    pub fn winners(&self) -> Vec<usize> {
        match self {
            Outcome::Winner { player, .. } => vec![*player],
            Outcome::StackExhausted { winners, .. } => winners.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatView {
    pub name: String,
    pub kind: PlayerKind,
    pub tiles: usize,
    pub longest_run: usize,
}

/// Read-only snapshot for display code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameView {
    pub phase: Phase,
    pub current: usize,
    pub turn: u32,
    pub hand: Vec<u8>,
    pub discard: Option<u8>,
    pub remaining: usize,
    pub seats: Vec<SeatView>,
    #[serde(default)]
    pub outcome: Option<Outcome>,
}
