use crate::Tile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DrawSource {
    Stack,
    Discard,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    Shuffled { tiles: usize },
    Dealt { player: usize, count: usize },
    TileDrawn {
        player: usize,
        source: DrawSource,
        tile: Tile,
    },
    TileDiscarded {
        player: usize,
        tile: Tile,
        index: usize,
    },
    TurnPassed { next: usize },
    PlayerWon { player: usize, run_length: usize },
    StackExhausted {
        winners: Vec<usize>,
        run_length: usize,
    },
}

/// Receives engine notifications. Handed to the game when it is built.
pub trait GameObserver {
    fn on_event(&mut self, event: &Event);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_event(&mut self, _event: &Event) {}
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}

impl GameObserver for EventBus {
    fn on_event(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

/// Forwards events to the `log` facade under the `okey` target.
#[derive(Debug, Default, Clone)]
pub struct LogObserver {
    names: Vec<String>,
}

impl LogObserver {
    pub fn with_names(names: Vec<String>) -> Self {
        Self { names }
    }

    fn name(&self, player: usize) -> String {
        self.names
            .get(player)
            .cloned()
            .unwrap_or_else(|| format!("player {player}"))
    }
}

impl GameObserver for LogObserver {
    fn on_event(&mut self, event: &Event) {
        match event {
            Event::Shuffled { tiles } => log::debug!(target: "okey", "shuffled {tiles} tiles"),
            Event::Dealt { player, count } => {
                log::debug!(target: "okey", "{} dealt {count} tiles", self.name(*player))
            }
            Event::TileDrawn {
                player,
                source,
                tile,
            } => {
                let from = match source {
                    DrawSource::Stack => "tiles",
                    DrawSource::Discard => "discard",
                };
                log::debug!(target: "okey", "{} picked up {tile} from {from}", self.name(*player))
            }
            Event::TileDiscarded {
                player,
                tile,
                index,
            } => log::debug!(
                target: "okey",
                "{} discarded {tile} from slot {index}",
                self.name(*player)
            ),
            Event::TurnPassed { next } => {
                log::trace!(target: "okey", "turn passes to {}", self.name(*next))
            }
            Event::PlayerWon { player, run_length } => log::info!(
                target: "okey",
                "{} wins with a run of {run_length}",
                self.name(*player)
            ),
            Event::StackExhausted {
                winners,
                run_length,
            } => {
                let names: Vec<String> = winners.iter().map(|&p| self.name(p)).collect();
                log::info!(
                    target: "okey",
                    "stack exhausted, best run {run_length}: {}",
                    names.join(", ")
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_bus_drains_in_order() {
        let mut bus = EventBus::default();
        bus.on_event(&Event::Shuffled { tiles: 104 });
        bus.on_event(&Event::TurnPassed { next: 1 });
        assert_eq!(bus.len(), 2);
        let drained: Vec<Event> = bus.drain().collect();
        assert_eq!(drained[0], Event::Shuffled { tiles: 104 });
        assert_eq!(drained[1], Event::TurnPassed { next: 1 });
        assert!(bus.is_empty());
    }

    #[test]
    fn log_observer_falls_back_to_seat_label() {
        let observer = LogObserver::with_names(vec!["Ada".to_string()]);
        assert_eq!(observer.name(0), "Ada");
        assert_eq!(observer.name(3), "player 3");
    }
}
