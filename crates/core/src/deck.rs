use crate::{RngState, Tile, COPIES_PER_VALUE, MAX_TILE_VALUE, MIN_TILE_VALUE, TOTAL_TILES};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    #[error("no tiles left in the stack")]
    EmptyStack,
    #[error("discard slot is empty")]
    EmptyDiscard,
    #[error("stack was already shuffled or drawn from")]
    AlreadyShuffled,
}

/// The shared draw stack plus the single discard slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    stack: VecDeque<Tile>,
    discard: Option<Tile>,
    buried: usize,
    shuffled: bool,
    locked: bool,
}

impl Deck {
    /// Four copies of every value, lowest first.
    pub fn standard() -> Self {
        let mut stack = VecDeque::with_capacity(TOTAL_TILES);
        for value in MIN_TILE_VALUE..=MAX_TILE_VALUE {
            for _ in 0..COPIES_PER_VALUE {
                stack.push_back(Tile::raw(value));
            }
        }
        Self::from_tiles(stack)
    }

    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            stack: tiles.into_iter().collect(),
            discard: None,
            buried: 0,
            shuffled: false,
            locked: false,
        }
    }

    /// Permutes the undealt tiles. Only valid once, before the first draw.
    pub fn shuffle(&mut self, rng: &mut RngState) -> Result<(), DeckError> {
        if self.locked {
            return Err(DeckError::AlreadyShuffled);
        }
        rng.shuffle(self.stack.make_contiguous());
        self.shuffled = true;
        self.locked = true;
        Ok(())
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn draw(&mut self) -> Result<Tile, DeckError> {
        let tile = self.stack.pop_front().ok_or(DeckError::EmptyStack)?;
        self.locked = true;
        Ok(tile)
    }

    pub fn remaining(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Replaces whatever sits in the discard slot. A replaced tile is out of
    /// play for the rest of the game.
    pub fn discard(&mut self, tile: Tile) {
        if self.discard.replace(tile).is_some() {
            self.buried += 1;
        }
    }

    /// Hands out the discarded tile and leaves the slot empty.
    pub fn take_discard(&mut self) -> Result<Tile, DeckError> {
        self.discard.take().ok_or(DeckError::EmptyDiscard)
    }

    pub fn peek_discard(&self) -> Option<Tile> {
        self.discard
    }

    /// Tiles lost to overwritten discards.
    pub fn buried(&self) -> usize {
        self.buried
    }

    /// Tiles accounted for by the deck itself: stack, slot and buried.
    pub fn accounted(&self) -> usize {
        self.stack.len() + usize::from(self.discard.is_some()) + self.buried
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn value_counts(deck: &mut Deck) -> HashMap<u8, usize> {
        let mut counts = HashMap::new();
        while let Ok(tile) = deck.draw() {
            *counts.entry(tile.value()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn standard_deck_has_four_of_each() {
        let mut deck = Deck::standard();
        assert_eq!(deck.remaining(), TOTAL_TILES);
        let counts = value_counts(&mut deck);
        assert_eq!(counts.len(), 26);
        assert!(counts.values().all(|&count| count == COPIES_PER_VALUE));
    }

    #[test]
    fn draw_takes_from_the_front() {
        let mut deck = Deck::standard();
        assert_eq!(deck.draw().map(Tile::value), Ok(1));
        assert_eq!(deck.remaining(), TOTAL_TILES - 1);
    }

    #[test]
    fn shuffle_preserves_multiset() {
        let mut deck = Deck::standard();
        deck.shuffle(&mut RngState::from_seed(11)).expect("shuffle");
        let counts = value_counts(&mut deck);
        assert!(counts.values().all(|&count| count == COPIES_PER_VALUE));
    }

    #[test]
    fn shuffle_only_once() {
        let mut deck = Deck::standard();
        let mut rng = RngState::from_seed(5);
        deck.shuffle(&mut rng).expect("first shuffle");
        assert_eq!(deck.shuffle(&mut rng), Err(DeckError::AlreadyShuffled));
    }

    #[test]
    fn shuffle_after_draw_is_rejected() {
        let mut deck = Deck::standard();
        deck.draw().expect("draw");
        assert_eq!(
            deck.shuffle(&mut RngState::from_seed(5)),
            Err(DeckError::AlreadyShuffled)
        );
    }

    #[test]
    fn drawing_does_not_count_as_shuffling() {
        let mut deck = Deck::standard();
        assert!(!deck.is_shuffled());
        deck.draw().expect("draw");
        assert!(!deck.is_shuffled());
        deck = Deck::standard();
        deck.shuffle(&mut RngState::from_seed(5)).expect("shuffle");
        assert!(deck.is_shuffled());
    }

    #[test]
    fn empty_stack_draw_leaves_discard_alone() {
        let mut deck = Deck::from_tiles(Vec::new());
        deck.discard(Tile::new(4).unwrap());
        assert_eq!(deck.draw(), Err(DeckError::EmptyStack));
        assert_eq!(deck.peek_discard().map(Tile::value), Some(4));
        assert_eq!(deck.buried(), 0);
    }

    #[test]
    fn take_discard_clears_the_slot() {
        let mut deck = Deck::standard();
        deck.discard(Tile::new(8).unwrap());
        assert_eq!(deck.take_discard().map(Tile::value), Ok(8));
        assert_eq!(deck.peek_discard(), None);
        assert_eq!(deck.take_discard(), Err(DeckError::EmptyDiscard));
    }

    #[test]
    fn overwritten_discard_is_buried() {
        let mut deck = Deck::from_tiles(Vec::new());
        deck.discard(Tile::new(2).unwrap());
        deck.discard(Tile::new(3).unwrap());
        assert_eq!(deck.peek_discard().map(Tile::value), Some(3));
        assert_eq!(deck.buried(), 1);
        assert_eq!(deck.accounted(), 2);
    }

    #[test]
    fn shuffle_is_roughly_uniform() {
        // Three distinct tiles have six orderings; each should show up
        // close to a sixth of the time.
        let trials = 6000;
        let mut seen: HashMap<Vec<u8>, usize> = HashMap::new();
        let mut rng = RngState::from_seed(2024);
        for _ in 0..trials {
            let mut deck = Deck::from_tiles([1, 2, 3].map(|v| Tile::new(v).unwrap()));
            deck.shuffle(&mut rng).expect("shuffle");
            let order: Vec<u8> = std::iter::from_fn(|| deck.draw().ok())
                .map(Tile::value)
                .collect();
            *seen.entry(order).or_insert(0) += 1;
        }
        assert_eq!(seen.len(), 6);
        for (order, count) in seen {
            assert!(
                (800..=1200).contains(&count),
                "ordering {order:?} seen {count} times"
            );
        }
    }
}
