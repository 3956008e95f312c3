//! # wwii-memory
//!
//! A headless engine for a memory-matching game whose cards show World War
//! II aircraft, tanks, ships and weapons.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Boards come from a seeded ChaCha RNG and time is a
//!    logical clock the host advances. The same seed and the same inputs
//!    replay the same game.
//!
//! 2. **Explicit transitions**: `Idle -> Active -> Complete` is a state
//!    machine, not a set of reactive effects. Completion is edge-triggered
//!    and notifies observers exactly once.
//!
//! 3. **Cancellable timers**: Pair resolution and the stopwatch are
//!    scheduler entries. Dealing a new board cancels all of them.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use wwii_memory::prelude::*;
//!
//! let mut game = MemoryGame::builder()
//!     .difficulty(Difficulty::Easy)
//!     .seed(7)
//!     .observer(|done: &CompletionEvent| println!("score {}", done.score))
//!     .build()
//!     .unwrap();
//!
//! game.flip(0);
//! game.flip(1);
//! assert_eq!(game.state().moves(), 1);
//!
//! game.advance(Duration::from_millis(1500));
//! assert!(game.state().flipped().is_empty());
//! ```
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card definitions, the catalog, board cards
//! - `deck`: Dealing boards
//! - `timing`: Logical-time scheduler and stopwatch
//! - `game`: Board state and the game state machine
//! - `events`: Event stream, completion payload, observers
//! - `scoring`: Score and accuracy

pub mod cards;
pub mod core;
pub mod deck;
pub mod events;
pub mod game;
pub mod scoring;
pub mod timing;

// Re-export commonly used types
pub use crate::core::{
    CatalogPolicy, ConfigError, DeckError, Difficulty, DifficultySettings, Error, GameConfig,
    GameRng, GameRngState, Result,
};

pub use crate::cards::{CardCatalog, CardDefinition, CardId, GameCard};

pub use crate::deck::DeckBuilder;

pub use crate::events::{CompletionData, CompletionEvent, EventLog, GameEvent, GameObserver};

pub use crate::game::{
    BoardLayout, CardView, FlipOutcome, FlipRejection, GameState, GameStats, MemoryGame,
    MemoryGameBuilder, Phase,
};

pub use crate::scoring::ScoreRules;

pub use crate::timing::{Scheduler, Stopwatch, TimerId};

/// Everything a host usually needs.
pub mod prelude {
    pub use crate::{
        CardCatalog, CardId, CompletionEvent, Difficulty, FlipOutcome, FlipRejection, GameConfig,
        GameEvent, GameObserver, MemoryGame, Phase,
    };
}
