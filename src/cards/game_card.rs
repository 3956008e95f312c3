//! Board cards - one per slot.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// A card on the board.
///
/// Created when a game is dealt and thrown away on reset. The pair identity
/// points back into the catalog; two `GameCard`s share each `pair`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameCard {
    /// Board position, unique within a game.
    pub slot: usize,

    /// Definition shared by both cards of the pair.
    pub pair: CardId,

    /// Has the pair been found?
    pub matched: bool,
}

impl GameCard {
    /// Create an unmatched card.
    #[must_use]
    pub const fn new(slot: usize, pair: CardId) -> Self {
        Self {
            slot,
            pair,
            matched: false,
        }
    }

    /// Do two cards form a pair?
    #[must_use]
    pub fn pairs_with(&self, other: &GameCard) -> bool {
        self.slot != other.slot && self.pair == other.pair
    }
}
