//! Game event types.
//!
//! Events describe every state change of a game, in the order it happened.
//! Hosts that animate the board subscribe to them; hosts that only care
//! about the final result implement
//! [`GameObserver::on_completion`](super::GameObserver::on_completion).

use serde::{Deserialize, Serialize};

use super::completion::CompletionEvent;
use crate::cards::CardId;
use crate::core::Difficulty;

/// A state change of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// A fresh board was dealt.
    NewGame {
        difficulty: Difficulty,
        total_pairs: usize,
    },

    /// First card of the game was flipped; the stopwatch is running.
    Started,

    /// A card was turned face up.
    CardFlipped { slot: usize, pair: CardId },

    /// A second card was turned; the move counter already includes it.
    PairRevealed {
        slots: [usize; 2],
        matched: bool,
        moves: u32,
    },

    /// A revealed pair was confirmed after the match delay.
    PairMatched { pair: CardId, slots: [usize; 2] },

    /// A mismatched pair was turned back over.
    PairHidden { slots: [usize; 2] },

    /// The stopwatch counted another second.
    Tick { elapsed_seconds: u32 },

    /// Every pair is matched. Emitted once per game.
    Completed(CompletionEvent),
}

impl GameEvent {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::NewGame { .. } => "new_game",
            GameEvent::Started => "started",
            GameEvent::CardFlipped { .. } => "card_flipped",
            GameEvent::PairRevealed { .. } => "pair_revealed",
            GameEvent::PairMatched { .. } => "pair_matched",
            GameEvent::PairHidden { .. } => "pair_hidden",
            GameEvent::Tick { .. } => "tick",
            GameEvent::Completed(_) => "completed",
        }
    }

    /// Is this the completion event?
    #[must_use]
    pub fn is_completion(&self) -> bool {
        matches!(self, GameEvent::Completed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(GameEvent::Started.name(), "started");
        assert_eq!(
            GameEvent::PairHidden { slots: [0, 1] }.name(),
            "pair_hidden"
        );
        assert!(!GameEvent::Tick { elapsed_seconds: 1 }.is_completion());
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::CardFlipped {
            slot: 3,
            pair: CardId::new(2),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "card_flipped");
        assert_eq!(json["slot"], 3);

        let deserialized: GameEvent = serde_json::from_value(json).unwrap();
        assert_eq!(event, deserialized);
    }
}
