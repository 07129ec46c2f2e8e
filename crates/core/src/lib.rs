//! Game engine for the jokerless four-player tile game. Keep this crate free
//! of IO and display concerns; drivers talk to it through [`Game`].

pub mod config;
pub mod deck;
pub mod events;
pub mod game;
pub mod hand;
pub mod rng;
pub mod rules;
pub mod state;
pub mod tile;

pub use config::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use hand::*;
pub use rng::*;
pub use rules::*;
pub use state::*;
pub use tile::*;
