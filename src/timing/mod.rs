//! Logical-time scheduling.
//!
//! The engine never reads a wall clock. Hosts advance time explicitly and
//! the [`Scheduler`] hands back whatever became due, in order. This keeps
//! games deterministic and makes cancellation exact: an entry that has been
//! cancelled is gone and can never fire late.
//!
//! - [`Scheduler`]: one-shot and repeating entries keyed by [`TimerId`]
//! - [`Stopwatch`]: the per-game seconds counter built on a repeating entry

mod scheduler;
mod stopwatch;

pub use scheduler::{Fired, Scheduler, TimerId};
pub use stopwatch::Stopwatch;
