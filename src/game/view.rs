//! Board read-model for renderers.

use serde::Serialize;

use crate::cards::{CardDefinition, CardId};

/// How one slot should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardView<'a> {
    pub slot: usize,
    pub pair: CardId,
    /// Flipped and unresolved, or matched.
    pub face_up: bool,
    /// Clicks are ignored (pair pending or already matched).
    pub disabled: bool,
    pub matched: bool,
    /// Present only when face up, so a renderer cannot leak hidden cards.
    pub definition: Option<&'a CardDefinition>,
}

/// Grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoardLayout {
    pub columns: usize,
    pub rows: usize,
}

impl BoardLayout {
    /// Layout for `cards` cards in `columns` columns.
    #[must_use]
    pub fn new(cards: usize, columns: usize) -> Self {
        let columns = columns.max(1);
        Self {
            columns,
            rows: cards.div_ceil(columns),
        }
    }

    /// Row and column of a slot.
    #[must_use]
    pub fn position(&self, slot: usize) -> (usize, usize) {
        (slot / self.columns, slot % self.columns)
    }
}
