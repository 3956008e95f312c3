//! Stats panel read-model.

use serde::{Deserialize, Serialize};

use crate::scoring::percent;

/// Counters shown next to the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub moves: u32,
    pub matches: usize,
    pub total_pairs: usize,
    pub elapsed_seconds: u32,
    pub completed: bool,
}

impl GameStats {
    /// Elapsed time as `m:ss`.
    #[must_use]
    pub fn formatted_time(&self) -> String {
        format_time(self.elapsed_seconds)
    }

    /// Accuracy shown on the panel.
    ///
    /// Counts flips rather than moves: `round(matches / (moves / 2) * 100)`,
    /// or 0 before the first move. The completion payload uses
    /// [`scoring::accuracy`](crate::scoring::accuracy) instead.
    #[must_use]
    pub fn display_accuracy(&self) -> u32 {
        if self.moves == 0 {
            return 0;
        }
        percent(self.matches as f64 / (f64::from(self.moves) / 2.0))
    }

    /// `matches/total` label.
    #[must_use]
    pub fn pairs_label(&self) -> String {
        format!("{}/{}", self.matches, self.total_pairs)
    }
}

/// Format seconds as `m:ss`.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(75), "1:15");
        assert_eq!(format_time(600), "10:00");
    }

    #[test]
    fn test_display_accuracy() {
        let mut stats = GameStats::default();
        assert_eq!(stats.display_accuracy(), 0);

        stats.moves = 8;
        stats.matches = 4;
        assert_eq!(stats.display_accuracy(), 100);

        stats.moves = 6;
        stats.matches = 1;
        assert_eq!(stats.display_accuracy(), 33);
    }

    #[test]
    fn test_labels() {
        let stats = GameStats {
            moves: 3,
            matches: 2,
            total_pairs: 6,
            elapsed_seconds: 61,
            completed: false,
        };
        assert_eq!(stats.pairs_label(), "2/6");
        assert_eq!(stats.formatted_time(), "1:01");
    }
}
