//! Game stopwatch.

use std::time::Duration;

use tracing::trace;

use super::scheduler::{Scheduler, TimerId};

/// Counts whole seconds of play.
///
/// Owns a single repeating scheduler entry. Ticks are only counted when
/// they carry the handle of the running entry, so a tick from a stopped or
/// replaced stopwatch is ignored.
#[derive(Clone, Debug, Default)]
pub struct Stopwatch {
    elapsed_seconds: u32,
    tick: Option<TimerId>,
}

impl Stopwatch {
    /// A stopped stopwatch at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds counted so far.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// Is a tick entry scheduled?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.tick.is_some()
    }

    /// Start ticking every `interval`. No-op when already running.
    pub fn start<T: Clone>(&mut self, scheduler: &mut Scheduler<T>, interval: Duration, payload: T) {
        if self.tick.is_none() {
            self.tick = Some(scheduler.schedule_repeating(interval, payload));
        }
    }

    /// Stop ticking, keeping the count.
    pub fn stop<T: Clone>(&mut self, scheduler: &mut Scheduler<T>) {
        if let Some(id) = self.tick.take() {
            scheduler.cancel(id);
        }
    }

    /// Does this scheduler entry belong to the running stopwatch?
    #[must_use]
    pub fn owns(&self, id: TimerId) -> bool {
        self.tick == Some(id)
    }

    /// Count a tick. Returns the new total, or `None` for a foreign tick.
    pub fn record_tick(&mut self, id: TimerId) -> Option<u32> {
        self.record_ticks(id, 1)
    }

    /// Count `count` ticks at once, saturating at `u32::MAX`.
    pub fn record_ticks(&mut self, id: TimerId, count: u64) -> Option<u32> {
        if !self.owns(id) {
            return None;
        }
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(count);
        trace!(elapsed = self.elapsed_seconds, count, "tick");
        Some(self.elapsed_seconds)
    }

    /// Forget the running entry and zero the count.
    ///
    /// The caller is responsible for the scheduler side, typically through
    /// [`Scheduler::cancel_all`].
    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
        self.tick = None;
    }
}
