//! Notifications sent from a game to its host.
//!
//! - [`GameEvent`]: every state change, in order
//! - [`CompletionEvent`]: the final result, sent once per game
//! - [`GameObserver`]: the single interface a host registers
//! - [`EventLog`]: an observer that records what it receives

mod completion;
mod event;
mod observer;

pub use completion::{CompletionData, CompletionEvent, COMPLETION_EVENT_TYPE};
pub use event::GameEvent;
pub use observer::{EventLog, GameObserver};
