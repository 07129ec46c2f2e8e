use super::*;
use crate::*;

impl Game {
    pub fn new(config: GameConfig, observer: Box<dyn GameObserver>) -> Result<Self, GameError> {
        Self::with_deck(config, Deck::standard(), observer)
    }

    /// Builds a game over a caller-supplied stack, drawn front first.
    pub fn with_deck(
        config: GameConfig,
        deck: Deck,
        observer: Box<dyn GameObserver>,
    ) -> Result<Self, GameError> {
        if config.seats.len() != PLAYER_COUNT {
            return Err(GameError::InvalidPlayerCount(config.seats.len()));
        }
        let players = config
            .seats
            .iter()
            .map(|seat| Player::new(seat.name.clone(), seat.kind))
            .collect();
        Ok(Self {
            players,
            deck,
            rng: RngState::from_seed(config.seed),
            phase: Phase::Setup,
            current: DEALER_SEAT,
            turn: 0,
            outcome: None,
            observer,
        })
    }

    pub fn shuffle(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Setup)?;
        self.deck.shuffle(&mut self.rng)?;
        self.notify(Event::Shuffled {
            tiles: self.deck.remaining(),
        });
        Ok(())
    }

    /// Fifteen tiles to the dealer, fourteen to everyone else, straight off
    /// the top of the stack.
    pub fn deal(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Setup)?;
        if !self.deck.is_shuffled() {
            return Err(GameError::NotShuffled);
        }
        let needed = HAND_CAPACITY + OPENING_HAND * (PLAYER_COUNT - 1);
        if self.deck.remaining() < needed {
            return Err(DeckError::EmptyStack.into());
        }
        for seat in 0..PLAYER_COUNT {
            let count = if seat == DEALER_SEAT {
                HAND_CAPACITY
            } else {
                OPENING_HAND
            };
            for _ in 0..count {
                let tile = self.deck.draw()?;
                self.players[seat].hand.insert(tile)?;
            }
            self.notify(Event::Dealt {
                player: seat,
                count,
            });
        }
        self.current = DEALER_SEAT;
        self.begin_turn();
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_player(&self) -> usize {
        self.current
    }

    pub fn current_name(&self) -> &str {
        &self.players[self.current].name
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_hand(&self) -> &Hand {
        &self.players[self.current].hand
    }

    pub fn discard_tile(&self) -> Option<Tile> {
        self.deck.peek_discard()
    }

    pub fn remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn has_more_tiles(&self) -> bool {
        !self.deck.is_empty()
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn winners(&self) -> Vec<usize> {
        self.outcome
            .as_ref()
            .map(Outcome::winners)
            .unwrap_or_default()
    }

    /// Every tile the game started with: stack, hands, discard slot and
    /// buried discards. Constant for the life of the game.
    pub fn tiles_accounted(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|p| p.hand.len()).sum();
        self.deck.accounted() + in_hands
    }

    pub fn view(&self) -> GameView {
        GameView {
            phase: self.phase,
            current: self.current,
            turn: self.turn,
            hand: self.current_hand().values(),
            discard: self.deck.peek_discard().map(Tile::value),
            remaining: self.deck.remaining(),
            seats: self
                .players
                .iter()
                .map(|player| SeatView {
                    name: player.name.clone(),
                    kind: player.kind,
                    tiles: player.hand.len(),
                    longest_run: player.hand.longest_run_length(),
                })
                .collect(),
            outcome: self.outcome.clone(),
        }
    }

    pub(super) fn expect_phase(&self, phase: Phase) -> Result<(), GameError> {
        if self.phase == Phase::Finished {
            return Err(GameError::Finished);
        }
        if self.phase != phase {
            return Err(GameError::InvalidPhase(self.phase));
        }
        Ok(())
    }

    pub(super) fn notify(&mut self, event: Event) {
        self.observer.on_event(&event);
    }
}
