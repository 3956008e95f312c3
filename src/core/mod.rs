//! Core engine types: RNG, configuration, errors.
//!
//! Everything here is independent of the card catalog and the board, so the
//! game modules can share it without circular imports.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{CatalogPolicy, Difficulty, DifficultySettings, DifficultyTable, GameConfig, DEFAULT_BLOCK_ID};
pub use error::{ConfigError, DeckError, Error, Result};
pub use rng::{GameRng, GameRngState};
