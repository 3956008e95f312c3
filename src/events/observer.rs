//! Observer interface hosts register with a game.

use std::cell::RefCell;
use std::rc::Rc;

use super::completion::CompletionEvent;
use super::event::GameEvent;

/// Receives notifications from a [`MemoryGame`](crate::game::MemoryGame).
///
/// `on_completion` is called exactly once per finished game. `on_event`
/// sees every event, including the [`GameEvent::Completed`] that precedes
/// the `on_completion` call.
///
/// Any `FnMut(&CompletionEvent)` closure is an observer:
///
/// ```
/// use wwii_memory::events::{CompletionEvent, GameObserver};
///
/// let mut scores = Vec::new();
/// let mut observer = |event: &CompletionEvent| scores.push(event.score);
/// # let _ = &mut observer as &mut dyn GameObserver;
/// ```
pub trait GameObserver {
    /// Every pair has been matched.
    fn on_completion(&mut self, event: &CompletionEvent);

    /// Any state change.
    fn on_event(&mut self, _event: &GameEvent) {}
}

impl<F> GameObserver for F
where
    F: FnMut(&CompletionEvent),
{
    fn on_completion(&mut self, event: &CompletionEvent) {
        self(event)
    }
}

/// Observer that records everything it sees.
///
/// Clones share the same log, so a host can keep one handle and give the
/// other to the game.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    inner: Rc<RefCell<EventLogInner>>,
}

#[derive(Debug, Default)]
struct EventLogInner {
    events: Vec<GameEvent>,
    completions: Vec<CompletionEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.inner.borrow().events.clone()
    }

    /// Completion notifications received so far.
    #[must_use]
    pub fn completions(&self) -> Vec<CompletionEvent> {
        self.inner.borrow().completions.clone()
    }

    /// Drop everything recorded.
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.events.clear();
        inner.completions.clear();
    }
}

impl GameObserver for EventLog {
    fn on_completion(&mut self, event: &CompletionEvent) {
        self.inner.borrow_mut().completions.push(event.clone());
    }

    fn on_event(&mut self, event: &GameEvent) {
        self.inner.borrow_mut().events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::scoring::ScoreRules;

    fn completion() -> CompletionEvent {
        CompletionEvent::new("b", &ScoreRules::default(), Difficulty::Easy, 4, 10, 4)
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |event: &CompletionEvent| seen.push(event.score);
            observer.on_event(&GameEvent::Started);
            observer.on_completion(&completion());
        }
        assert_eq!(seen, [950]);
    }

    #[test]
    fn test_event_log_shares_state() {
        let log = EventLog::new();
        let mut handle: Box<dyn GameObserver> = Box::new(log.clone());

        handle.on_event(&GameEvent::Started);
        handle.on_completion(&completion());

        assert_eq!(log.events(), [GameEvent::Started]);
        assert_eq!(log.completions().len(), 1);

        log.clear();
        assert!(log.events().is_empty());
    }
}
