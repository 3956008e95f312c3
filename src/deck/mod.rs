//! Deck building: choosing pairs for a difficulty, duplicating and shuffling.
//!
//! The builder validates the catalog once against every difficulty when it
//! is constructed. After that, dealing a board cannot fail.

mod builder;

pub use builder::DeckBuilder;
