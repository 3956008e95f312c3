//! Error types.
//!
//! Only configuration and deck construction can fail. A rejected flip is a
//! normal game outcome and is reported through
//! [`FlipOutcome`](crate::game::FlipOutcome) instead.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::config::Difficulty;

/// Result type alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling a deck or a board layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("card catalog is empty")]
    EmptyCatalog,

    #[error("{difficulty} needs {required} card definitions but the catalog has {available}")]
    CatalogTooSmall {
        difficulty: Difficulty,
        required: usize,
        available: usize,
    },

    #[error("duplicate card id {id} in catalog")]
    DuplicateCardId { id: CardId },

    #[error("unknown card id {id}")]
    UnknownCard { id: CardId },

    #[error("layout has {actual} cards, {difficulty} expects {expected}")]
    LayoutSize {
        difficulty: Difficulty,
        expected: usize,
        actual: usize,
    },

    #[error("{id} appears {count} times in layout, expected exactly 2")]
    UnpairedCard { id: CardId, count: usize },
}

/// Errors raised while loading or validating a [`GameConfig`](crate::core::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Umbrella error for the crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
