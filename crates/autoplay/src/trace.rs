use crate::AutoplayError;
use okey_core::{DrawSource, PLAYER_COUNT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Won,
    StackExhausted,
    MaxTurns,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurnRecord {
    pub turn: u32,
    pub player: usize,
    #[serde(default)]
    pub source: Option<DrawSource>,
    #[serde(default)]
    pub drawn: Option<u8>,
    #[serde(default)]
    pub discarded: Option<u8>,
    pub remaining_after: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    pub status: GameStatus,
    pub winners: Vec<usize>,
    pub best_run: usize,
    pub turns: u32,
    pub remaining: usize,
    pub tiles_accounted: usize,
    #[serde(default)]
    pub steps: Vec<TurnRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: u32,
    pub wins_by_seat: Vec<u32>,
    pub outright_wins: u32,
    pub exhausted: u32,
    pub max_turns: u32,
    pub records: Vec<GameRecord>,
}

impl BatchSummary {
    pub fn from_records(records: Vec<GameRecord>) -> Self {
        let mut wins_by_seat = vec![0u32; PLAYER_COUNT];
        let mut outright_wins = 0;
        let mut exhausted = 0;
        let mut max_turns = 0;
        for record in &records {
            match record.status {
                GameStatus::Won => outright_wins += 1,
                GameStatus::StackExhausted => exhausted += 1,
                GameStatus::MaxTurns => max_turns += 1,
            }
            for &seat in &record.winners {
                if let Some(count) = wins_by_seat.get_mut(seat) {
                    *count += 1;
                }
            }
        }
        Self {
            games: records.len() as u32,
            wins_by_seat,
            outright_wins,
            exhausted,
            max_turns,
            records,
        }
    }

    pub fn to_json(&self) -> Result<String, AutoplayError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!(
                "games: {} outright: {} exhausted: {} max_turns: {}",
                self.games, self.outright_wins, self.exhausted, self.max_turns
            ),
            format!(
                "wins by seat: {}",
                self.wins_by_seat
                    .iter()
                    .enumerate()
                    .map(|(seat, wins)| format!("{seat}={wins}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
            String::new(),
        ];
        for record in &self.records {
            lines.push(format!(
                "seed {:>10} | {} | turns {:>3} | best run {:>2} | winners {:?}",
                record.seed,
                status_label(record.status),
                record.turns,
                record.best_run,
                record.winners
            ));
            for step in &record.steps {
                lines.push(format!(
                    "    turn {:>3} seat {} {} -> discard {} (stack {})",
                    step.turn,
                    step.player,
                    draw_label(step.source, step.drawn),
                    step.discarded
                        .map(|value| value.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    step.remaining_after
                ));
            }
        }
        lines.join("\n")
    }
}

fn draw_label(source: Option<DrawSource>, drawn: Option<u8>) -> String {
    match (source, drawn) {
        (Some(DrawSource::Stack), Some(value)) => format!("stack {value}"),
        (Some(DrawSource::Discard), Some(value)) => format!("discard {value}"),
        _ => "no draw".to_string(),
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Won => "won",
        GameStatus::StackExhausted => "stack exhausted",
        GameStatus::MaxTurns => "max turns",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: GameStatus, winners: Vec<usize>) -> GameRecord {
        GameRecord {
            seed: 1,
            status,
            winners,
            best_run: 0,
            turns: 10,
            remaining: 0,
            tiles_accounted: 104,
            steps: Vec::new(),
        }
    }

    #[test]
    fn summary_counts_shared_wins_per_seat() {
        let summary = BatchSummary::from_records(vec![
            record(GameStatus::StackExhausted, vec![0, 1, 2, 3]),
            record(GameStatus::Won, vec![2]),
            record(GameStatus::MaxTurns, Vec::new()),
        ]);
        assert_eq!(summary.games, 3);
        assert_eq!(summary.wins_by_seat, vec![1, 1, 2, 1]);
        assert_eq!(summary.outright_wins, 1);
        assert_eq!(summary.exhausted, 1);
        assert_eq!(summary.max_turns, 1);
    }

    #[test]
    fn report_lists_each_game() {
        let summary = BatchSummary::from_records(vec![record(GameStatus::Won, vec![1])]);
        let report = summary.to_text_report();
        assert!(report.contains("outright: 1"));
        assert!(report.contains("winners [1]"));
    }

    #[test]
    fn json_round_trips_status() {
        let summary = BatchSummary::from_records(vec![record(GameStatus::StackExhausted, vec![0])]);
        let body = summary.to_json().expect("json");
        let parsed: BatchSummary = serde_json::from_str(&body).expect("parse");
        assert_eq!(parsed.records[0].status, GameStatus::StackExhausted);
    }
}
