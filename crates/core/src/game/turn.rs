use super::*;
use crate::*;

impl Game {
    /// Moves one tile into the current player's hand, then checks for a win.
    ///
    /// With the stack exhausted the game ends on the spot and the draw is
    /// reported as `EmptyStack`; no hand or the discard slot is touched.
    pub fn draw(&mut self, source: DrawSource) -> Result<Tile, GameError> {
        self.expect_phase(Phase::Draw)?;
        if self.deck.is_empty() {
            self.finish_exhausted();
            return Err(DeckError::EmptyStack.into());
        }
        let seat = self.current;
        if self.players[seat].hand.is_full() {
            return Err(HandError::CapacityExceeded.into());
        }
        let tile = match source {
            DrawSource::Stack => self.deck.draw()?,
            DrawSource::Discard => self.deck.take_discard()?,
        };
        self.players[seat].hand.insert(tile)?;
        self.notify(Event::TileDrawn {
            player: seat,
            source,
            tile,
        });
        if !self.check_win() {
            self.phase = Phase::Discard;
        }
        Ok(tile)
    }

    pub fn discard(&mut self, index: usize) -> Result<Tile, GameError> {
        self.expect_phase(Phase::Discard)?;
        let seat = self.current;
        let tile = self.players[seat].hand.remove_at(index)?;
        self.deck.discard(tile);
        self.notify(Event::TileDiscarded {
            player: seat,
            tile,
            index,
        });
        self.phase = Phase::TurnOver;
        Ok(tile)
    }

    pub fn advance_turn(&mut self) -> Result<usize, GameError> {
        self.expect_phase(Phase::TurnOver)?;
        self.current = (self.current + 1) % PLAYER_COUNT;
        self.turn += 1;
        self.notify(Event::TurnPassed { next: self.current });
        self.begin_turn();
        Ok(self.current)
    }

    /// A full human turn: draw from `source`, then throw away the tile at
    /// `discard_index` of the resulting hand. `source` is ignored on the
    /// dealer's opening turn, which starts with a full hand.
    pub fn play_human_turn(
        &mut self,
        source: DrawSource,
        discard_index: usize,
    ) -> Result<TurnReport, GameError> {
        let seat = self.current;
        if self.phase == Phase::Finished {
            return Err(GameError::Finished);
        }
        if self.players[seat].is_computer() {
            return Err(GameError::NotHumanSeat(seat));
        }
        let hand_after_draw = match self.phase {
            Phase::Draw => self.players[seat].hand.len() + 1,
            Phase::Discard => self.players[seat].hand.len(),
            other => return Err(GameError::InvalidPhase(other)),
        };
        if discard_index >= hand_after_draw {
            return Err(HandError::InvalidIndex {
                index: discard_index,
                len: hand_after_draw,
            }
            .into());
        }
        if self.phase == Phase::Draw
            && source == DrawSource::Discard
            && self.deck.peek_discard().is_none()
        {
            return Err(DeckError::EmptyDiscard.into());
        }

        let mut report = TurnReport {
            player: seat,
            ..TurnReport::default()
        };
        if self.phase == Phase::Draw {
            let tile = self.draw(source)?;
            report.drew = Some((source, tile));
        }
        if self.phase == Phase::Discard {
            report.discarded = Some(self.discard(discard_index)?);
        }
        report.outcome = self.outcome.clone();
        Ok(report)
    }

    /// Draw and discard for a computer seat using the greedy heuristics.
    pub fn play_computer_turn(&mut self) -> Result<TurnReport, GameError> {
        let seat = self.current;
        if self.phase == Phase::Finished {
            return Err(GameError::Finished);
        }
        if !self.players[seat].is_computer() {
            return Err(GameError::NotComputerSeat(seat));
        }
        if !matches!(self.phase, Phase::Draw | Phase::Discard) {
            return Err(GameError::InvalidPhase(self.phase));
        }

        let mut report = TurnReport {
            player: seat,
            ..TurnReport::default()
        };
        if self.phase == Phase::Draw {
            if self.deck.is_empty() {
                self.finish_exhausted();
                report.outcome = self.outcome.clone();
                return Ok(report);
            }
            let discard = self.deck.peek_discard();
            let source = choose_draw_source(&mut self.players[seat].hand, discard);
            let tile = self.draw(source)?;
            report.drew = Some((source, tile));
        }
        if self.phase == Phase::Discard {
            let index = choose_discard_index(&self.players[seat].hand, &mut self.rng)
                .ok_or(HandError::InvalidIndex { index: 0, len: 0 })?;
            report.discarded = Some(self.discard(index)?);
        }
        report.outcome = self.outcome.clone();
        Ok(report)
    }

    /// Sets the phase for whoever holds the turn now. A full hand skips the
    /// draw but still gets its win check.
    pub(super) fn begin_turn(&mut self) {
        if self.players[self.current].hand.is_full() {
            if !self.check_win() {
                self.phase = Phase::Discard;
            }
            return;
        }
        self.phase = Phase::Draw;
    }

    fn check_win(&mut self) -> bool {
        let seat = self.current;
        let run_length = self.players[seat].hand.longest_run_length();
        if run_length < WINNING_RUN {
            return false;
        }
        self.outcome = Some(Outcome::Winner {
            player: seat,
            run_length,
        });
        self.phase = Phase::Finished;
        self.notify(Event::PlayerWon {
            player: seat,
            run_length,
        });
        true
    }

    fn finish_exhausted(&mut self) {
        let lengths: Vec<usize> = self
            .players
            .iter()
            .map(|player| player.hand.longest_run_length())
            .collect();
        let winners = select_winners(&lengths);
        let run_length = lengths.iter().copied().max().unwrap_or(0);
        self.outcome = Some(Outcome::StackExhausted {
            winners: winners.clone(),
            run_length,
        });
        self.phase = Phase::Finished;
        self.notify(Event::StackExhausted {
            winners,
            run_length,
        });
    }
}
