//! Card definitions - static card data.
//!
//! `CardDefinition` holds what a player sees when a card is face up: the
//! picture, its title and a short historical blurb. Both cards of a pair
//! share one definition.
//!
//! Per-board state (slot, matched flag) lives in `GameCard`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Also the pair identity: the two cards of a pair carry the same `CardId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use wwii_memory::cards::{CardDefinition, CardId};
///
/// let sherman = CardDefinition::new(CardId::new(3), "M4 Sherman Tank")
///     .with_image("https://example.org/sherman.jpg")
///     .with_description("Primary American medium tank used by Allied forces");
///
/// assert_eq!(sherman.title, "M4 Sherman Tank");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Image URI shown on the card face.
    pub image: String,

    /// Card title.
    pub title: String,

    /// One-line description under the title.
    pub description: String,
}

impl CardDefinition {
    /// Create a definition with only a title.
    #[must_use]
    pub fn new(id: CardId, title: impl Into<String>) -> Self {
        Self {
            id,
            image: String::new(),
            title: title.into(),
            description: String::new(),
        }
    }

    /// Set the image URI (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
