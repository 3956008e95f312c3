//! Cancellable scheduler on a logical clock.

use std::collections::BTreeMap;
use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Handle to a scheduled entry.
///
/// Carries the scheduler generation it was issued in. After
/// [`Scheduler::cancel_all`] old handles no longer refer to anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId {
    generation: u64,
    seq: u64,
}

impl TimerId {
    /// Generation this handle belongs to.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({}:{})", self.generation, self.seq)
    }
}

/// An entry that became due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    /// Handle of the entry.
    pub id: TimerId,
    /// Logical time the entry was due.
    pub at: Duration,
    /// Payload given when scheduling.
    pub payload: T,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    payload: T,
    interval: Option<Duration>,
}

/// Scheduler of one-shot and repeating entries.
///
/// Entries fire in due-time order; entries due at the same instant fire in
/// the order they were first scheduled.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use wwii_memory::timing::Scheduler;
///
/// let mut scheduler = Scheduler::new();
/// let hide = scheduler.schedule_once(Duration::from_millis(1500), "hide");
/// scheduler.schedule_once(Duration::from_millis(1000), "match");
///
/// let until = Duration::from_secs(2);
/// let first = scheduler.pop_due(until).unwrap();
/// assert_eq!(first.payload, "match");
///
/// assert!(scheduler.cancel(hide));
/// assert!(scheduler.pop_due(until).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    now: Duration,
    generation: u64,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), Entry<T>>,
    due_by_seq: FxHashMap<u64, Duration>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            generation: 0,
            next_seq: 0,
            queue: BTreeMap::new(),
            due_by_seq: FxHashMap::default(),
        }
    }
}

impl<T: Clone> Scheduler<T> {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of pending entries.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Is this entry still scheduled?
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        id.generation == self.generation && self.due_by_seq.contains_key(&id.seq)
    }

    /// Due time of the earliest entry.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    /// Due time of the earliest entry other than `id`.
    #[must_use]
    pub fn next_due_except(&self, id: TimerId) -> Option<Duration> {
        self.queue
            .iter()
            .find(|(_, entry)| entry.id != id)
            .map(|(&(due, _), _)| due)
    }

    /// Fire `payload` once, `delay` from now.
    pub fn schedule_once(&mut self, delay: Duration, payload: T) -> TimerId {
        self.insert(delay, payload, None)
    }

    /// Fire `payload` every `interval`, first at `now + interval`.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn schedule_repeating(&mut self, interval: Duration, payload: T) -> TimerId {
        assert!(!interval.is_zero(), "repeating interval must be non-zero");
        self.insert(interval, payload, Some(interval))
    }

    fn insert(&mut self, delay: Duration, payload: T, interval: Option<Duration>) -> TimerId {
        let id = TimerId {
            generation: self.generation,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        let due = self.now.saturating_add(delay);
        self.queue.insert((due, id.seq), Entry { id, payload, interval });
        self.due_by_seq.insert(id.seq, due);
        id
    }

    /// Cancel one entry. Returns `false` if it already fired, was cancelled,
    /// or belongs to an older generation.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if id.generation != self.generation {
            return false;
        }
        match self.due_by_seq.remove(&id.seq) {
            Some(due) => self.queue.remove(&(due, id.seq)).is_some(),
            None => false,
        }
    }

    /// Cancel every entry and start a new generation.
    pub fn cancel_all(&mut self) {
        self.queue.clear();
        self.due_by_seq.clear();
        self.generation += 1;
    }

    /// Pop the earliest entry due at or before `until`.
    ///
    /// Moves the clock to the entry's due time. Repeating entries are
    /// rescheduled before being returned, so cancelling them from the
    /// handler stops further firings. A repeating entry whose next firing
    /// would fall past `Duration::MAX` is dropped instead.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<T>> {
        let (&(due, seq), _) = self.queue.first_key_value()?;
        if due > until {
            return None;
        }

        let entry = self.queue.remove(&(due, seq))?;
        self.now = self.now.max(due);

        match entry.interval.and_then(|interval| due.checked_add(interval)) {
            Some(next) => {
                self.queue.insert((next, seq), entry.clone());
                self.due_by_seq.insert(seq, next);
            }
            None => {
                self.due_by_seq.remove(&seq);
            }
        }

        Some(Fired {
            id: entry.id,
            at: due,
            payload: entry.payload,
        })
    }

    /// Skip every firing of a repeating entry due at or before `limit`.
    ///
    /// Returns how many firings were skipped. The entry keeps its place in
    /// the schedule order, now due at its first firing after `limit` (or
    /// dropped when that would pass `Duration::MAX`). One-shot entries and
    /// stale handles are left alone.
    pub fn fast_forward(&mut self, id: TimerId, limit: Duration) -> u64 {
        if id.generation != self.generation {
            return 0;
        }
        let Some(&due) = self.due_by_seq.get(&id.seq) else {
            return 0;
        };
        if due > limit {
            return 0;
        }
        let Some(interval) = self.queue.get(&(due, id.seq)).and_then(|entry| entry.interval) else {
            return 0;
        };
        let Some(entry) = self.queue.remove(&(due, id.seq)) else {
            return 0;
        };

        let skipped = (limit - due).as_nanos() / interval.as_nanos() + 1;
        let next = due.as_nanos() + skipped * interval.as_nanos();
        match duration_from_nanos(next) {
            Some(next) => {
                self.queue.insert((next, id.seq), entry);
                self.due_by_seq.insert(id.seq, next);
            }
            None => {
                self.due_by_seq.remove(&id.seq);
            }
        }

        u64::try_from(skipped).unwrap_or(u64::MAX)
    }

    /// Move the clock forward to `until` once nothing else is due.
    pub fn settle(&mut self, until: Duration) {
        debug_assert!(
            self.next_due().map_or(true, |due| due > until),
            "settling past a due entry"
        );
        self.now = self.now.max(until);
    }

    /// Pop everything due by `now + by` and move the clock there.
    ///
    /// Convenience for callers whose handlers never cancel entries.
    pub fn advance(&mut self, by: Duration) -> Vec<Fired<T>> {
        let until = self.now.saturating_add(by);
        let mut fired = Vec::new();
        while let Some(entry) = self.pop_due(until) {
            fired.push(entry);
        }
        self.settle(until);
        fired
    }
}

fn duration_from_nanos(nanos: u128) -> Option<Duration> {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).ok()?;
    Some(Duration::new(secs, (nanos % NANOS_PER_SEC) as u32))
}
