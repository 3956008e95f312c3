//! Completion notification payload.
//!
//! Serializes to the message shape embedding pages listen for:
//!
//! ```json
//! {
//!   "type": "BLOCK_COMPLETION",
//!   "blockId": "6853c6e77405ab9cb3e4cf03",
//!   "completed": true,
//!   "score": 908,
//!   "maxScore": 1000,
//!   "timeSpent": 32,
//!   "data": { "difficulty": "easy", "moves": 6, "timeElapsed": 32, "accuracy": 67 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;
use crate::scoring::{accuracy, ScoreRules};

/// Value of the `type` field.
pub const COMPLETION_EVENT_TYPE: &str = "BLOCK_COMPLETION";

/// Sent once when every pair has been matched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub block_id: String,
    pub completed: bool,
    pub score: u32,
    pub max_score: u32,
    pub time_spent: u32,
    pub data: CompletionData,
}

/// Game details carried in `data`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionData {
    pub difficulty: Difficulty,
    pub moves: u32,
    pub time_elapsed: u32,
    /// `round(matched_pairs / max(moves, 1) * 100)`
    pub accuracy: u32,
}

impl CompletionEvent {
    /// Build the notification for a finished game.
    #[must_use]
    pub fn new(
        block_id: impl Into<String>,
        rules: &ScoreRules,
        difficulty: Difficulty,
        moves: u32,
        elapsed_seconds: u32,
        matched_pairs: usize,
    ) -> Self {
        Self {
            event_type: COMPLETION_EVENT_TYPE.to_string(),
            block_id: block_id.into(),
            completed: true,
            score: rules.score(moves, elapsed_seconds),
            max_score: rules.max_score,
            time_spent: elapsed_seconds,
            data: CompletionData {
                difficulty,
                moves,
                time_elapsed: elapsed_seconds,
                accuracy: accuracy(matched_pairs, moves),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_score_and_accuracy() {
        let event = CompletionEvent::new("block", &ScoreRules::default(), Difficulty::Easy, 6, 32, 4);

        assert_eq!(event.event_type, COMPLETION_EVENT_TYPE);
        assert!(event.completed);
        assert_eq!(event.score, 1000 - 60 - 32);
        assert_eq!(event.max_score, 1000);
        assert_eq!(event.time_spent, 32);
        assert_eq!(event.data.moves, 6);
        assert_eq!(event.data.time_elapsed, 32);
        assert_eq!(event.data.accuracy, 67);
    }

    #[test]
    fn test_wire_shape() {
        let event = CompletionEvent::new(
            crate::core::DEFAULT_BLOCK_ID,
            &ScoreRules::default(),
            Difficulty::Hard,
            8,
            20,
            8,
        );

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "BLOCK_COMPLETION",
                "blockId": "6853c6e77405ab9cb3e4cf03",
                "completed": true,
                "score": 900,
                "maxScore": 1000,
                "timeSpent": 20,
                "data": {
                    "difficulty": "hard",
                    "moves": 8,
                    "timeElapsed": 20,
                    "accuracy": 100
                }
            })
        );
    }
}
