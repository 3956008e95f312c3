//! Results of a flip attempt.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Why a flip was ignored.
///
/// None of these are errors: the board simply did not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipRejection {
    /// No card at that slot.
    OutOfRange,
    /// Two cards are face up and waiting to be resolved.
    ResolutionPending,
    /// The card is already face up.
    AlreadyFlipped,
    /// The card's pair has been found.
    AlreadyMatched,
    /// The game is over.
    GameComplete,
}

impl std::fmt::Display for FlipRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            FlipRejection::OutOfRange => "no card at that position",
            FlipRejection::ResolutionPending => "wait for the open pair to turn",
            FlipRejection::AlreadyFlipped => "card is already face up",
            FlipRejection::AlreadyMatched => "pair already found",
            FlipRejection::GameComplete => "game is over",
        };
        f.write_str(text)
    }
}

/// What happened when a card was clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FlipOutcome {
    /// First card of a pair is face up.
    FirstCard { slot: usize, pair: CardId },

    /// Second card is face up; a move was counted and resolution scheduled.
    SecondCard {
        slots: [usize; 2],
        pair: CardId,
        matched: bool,
    },

    /// Flip ignored.
    Rejected { reason: FlipRejection },
}

impl FlipOutcome {
    /// Did the board change?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, FlipOutcome::Rejected { .. })
    }

    /// Rejection reason, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<FlipRejection> {
        match self {
            FlipOutcome::Rejected { reason } => Some(*reason),
            _ => None,
        }
    }
}

impl From<FlipRejection> for FlipOutcome {
    fn from(reason: FlipRejection) -> Self {
        FlipOutcome::Rejected { reason }
    }
}

/// How a revealed pair is settled once its delay runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Resolution {
    Match { pair: CardId, slots: [usize; 2] },
    Mismatch { slots: [usize; 2] },
}
