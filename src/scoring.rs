//! Score and accuracy formulas.
//!
//! `score = max(max_score - moves * move_penalty - seconds * second_penalty, min_score)`
//!
//! With the default rules that is `max(1000 - moves*10 - seconds, 100)`.

use serde::{Deserialize, Serialize};

/// Constants used to turn final stats into a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRules {
    /// Score before penalties; also reported as `maxScore`.
    pub max_score: u32,
    /// Floor applied after penalties.
    pub min_score: u32,
    /// Points lost per move.
    pub move_penalty: u32,
    /// Points lost per elapsed second.
    pub second_penalty: u32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            max_score: 1000,
            min_score: 100,
            move_penalty: 10,
            second_penalty: 1,
        }
    }
}

impl ScoreRules {
    /// Score for a finished game.
    #[must_use]
    pub fn score(&self, moves: u32, elapsed_seconds: u32) -> u32 {
        let penalty = u64::from(moves) * u64::from(self.move_penalty)
            + u64::from(elapsed_seconds) * u64::from(self.second_penalty);
        let raw = u64::from(self.max_score).saturating_sub(penalty);
        // raw <= max_score, so the conversion cannot fail
        u32::try_from(raw).unwrap_or(0).max(self.min_score)
    }
}

/// Score with the default rules.
#[must_use]
pub fn score(moves: u32, elapsed_seconds: u32) -> u32 {
    ScoreRules::default().score(moves, elapsed_seconds)
}

/// Matched pairs per move as a rounded percentage.
///
/// `round(matched_pairs / max(moves, 1) * 100)`
#[must_use]
pub fn accuracy(matched_pairs: usize, moves: u32) -> u32 {
    let moves = moves.max(1) as f64;
    percent(matched_pairs as f64 / moves)
}

pub(crate) fn percent(ratio: f64) -> u32 {
    (ratio * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_game() {
        // 4 pairs, 4 moves, 12 seconds
        assert_eq!(score(4, 12), 1000 - 40 - 12);
    }

    #[test]
    fn test_score_floor() {
        assert_eq!(score(90, 0), 100);
        assert_eq!(score(0, 5000), 100);
        assert_eq!(score(u32::MAX, u32::MAX), 100);
    }

    #[test]
    fn test_score_exactly_at_floor() {
        // 1000 - 800 - 100 = 100
        assert_eq!(score(80, 100), 100);
        assert_eq!(score(80, 99), 101);
    }

    #[test]
    fn test_custom_rules() {
        let rules = ScoreRules {
            max_score: 500,
            min_score: 0,
            move_penalty: 5,
            second_penalty: 2,
        };
        assert_eq!(rules.score(10, 10), 430);
        assert_eq!(rules.score(100, 10), 0);
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(4, 4), 100);
        assert_eq!(accuracy(4, 8), 50);
        assert_eq!(accuracy(6, 9), 67);
        assert_eq!(accuracy(0, 0), 0);
        // 1/8 = 12.5 rounds up
        assert_eq!(accuracy(1, 8), 13);
    }
}
