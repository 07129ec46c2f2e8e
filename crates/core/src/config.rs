use serde::{Deserialize, Serialize};

pub const DEFAULT_SEED: u64 = 0xC0FFEE;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatConfig {
    pub name: String,
    pub kind: PlayerKind,
}

impl SeatConfig {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Computer,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    pub seats: Vec<SeatConfig>,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::single_human("You", DEFAULT_SEED)
    }
}

impl GameConfig {
    /// Seat 0 is the human; the other three are computers.
    pub fn single_human(name: impl Into<String>, seed: u64) -> Self {
        Self {
            seed,
            seats: vec![
                SeatConfig::human(name),
                SeatConfig::computer("Computer 1"),
                SeatConfig::computer("Computer 2"),
                SeatConfig::computer("Computer 3"),
            ],
        }
    }

    pub fn all_computer(seed: u64) -> Self {
        Self {
            seed,
            seats: (1..=4)
                .map(|n| SeatConfig::computer(format!("Computer {n}")))
                .collect(),
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.seats.iter().map(|seat| seat.name.clone()).collect()
    }
}
