use crate::{AutoplayConfig, AutoplayError, BatchSummary, GameRecord, GameStatus, TurnRecord};
use okey_core::{Game, GameConfig, GameObserver, LogObserver, Outcome, TurnReport};

#[derive(Debug)]
pub struct Simulator {
    pub game: Game,
    seed: u64,
    steps: Vec<TurnRecord>,
}

impl Simulator {
    /// A shuffled and dealt all-computer game.
    pub fn new(seed: u64) -> Result<Self, AutoplayError> {
        let config = GameConfig::all_computer(seed);
        let observer: Box<dyn GameObserver> = Box::new(LogObserver::with_names(config.names()));
        Self::with_game(Game::new(config, observer)?, seed)
    }

    pub fn with_game(mut game: Game, seed: u64) -> Result<Self, AutoplayError> {
        game.shuffle()?;
        game.deal()?;
        Ok(Self {
            game,
            seed,
            steps: Vec::new(),
        })
    }

    /// Plays one computer turn and passes the turn on unless the game ended.
    pub fn step(&mut self) -> Result<TurnReport, AutoplayError> {
        let turn = self.game.turn();
        let report = self.game.play_computer_turn()?;
        self.steps.push(TurnRecord {
            turn,
            player: report.player,
            source: report.drew.map(|(source, _)| source),
            drawn: report.drew.map(|(_, tile)| tile.value()),
            discarded: report.discarded.map(|tile| tile.value()),
            remaining_after: self.game.remaining(),
        });
        if !self.game.is_finished() {
            self.game.advance_turn()?;
        }
        Ok(report)
    }

    pub fn run(mut self, max_turns: u32, keep_turns: bool) -> Result<GameRecord, AutoplayError> {
        while !self.game.is_finished() && self.game.turn() < max_turns {
            self.step()?;
        }
        let (status, winners, best_run) = match self.game.outcome() {
            Some(Outcome::Winner { player, run_length }) => {
                (GameStatus::Won, vec![*player], *run_length)
            }
            Some(Outcome::StackExhausted {
                winners,
                run_length,
            }) => (GameStatus::StackExhausted, winners.clone(), *run_length),
            None => (GameStatus::MaxTurns, Vec::new(), 0),
        };
        Ok(GameRecord {
            seed: self.seed,
            status,
            winners,
            best_run,
            turns: self.game.turn(),
            remaining: self.game.remaining(),
            tiles_accounted: self.game.tiles_accounted(),
            steps: if keep_turns { self.steps } else { Vec::new() },
        })
    }
}

pub fn run_batch(config: &AutoplayConfig) -> Result<BatchSummary, AutoplayError> {
    let mut records = Vec::with_capacity(config.games as usize);
    for offset in 0..config.games {
        let seed = config.seed.wrapping_add(u64::from(offset));
        log::debug!("autoplay game {offset} seed {seed}");
        let record = Simulator::new(seed)?.run(config.max_turns, config.keep_turns)?;
        records.push(record);
    }
    Ok(BatchSummary::from_records(records))
}
