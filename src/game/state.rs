//! Game state: the board and its counters.
//!
//! `GameState` holds everything a renderer needs and nothing about time
//! scheduling. Transitions here are pure; `MemoryGame` decides when they
//! run.
//!
//! Uses `im` persistent structures so handing a snapshot to a renderer is
//! an O(1) clone.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::flip::{FlipOutcome, FlipRejection, Resolution};
use super::stats::GameStats;
use crate::cards::{CardId, GameCard};
use crate::core::Difficulty;

/// Lifecycle of one game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Board dealt, nothing flipped yet, stopwatch stopped.
    #[default]
    Idle,
    /// At least one flip happened, stopwatch running.
    Active,
    /// Every pair matched. Terminal until the next deal.
    Complete,
}

/// State of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    cards: Vector<GameCard>,
    flipped: SmallVec<[usize; 2]>,
    matched: OrdSet<CardId>,
    moves: u32,
    elapsed_seconds: u32,
    phase: Phase,
    difficulty: Difficulty,
}

impl GameState {
    /// Fresh state for a dealt board.
    ///
    /// `cards[i].slot` must equal `i` and every pair must appear twice.
    #[must_use]
    pub fn new(difficulty: Difficulty, cards: Vec<GameCard>) -> Self {
        let state = Self {
            cards: cards.into_iter().collect(),
            flipped: SmallVec::new(),
            matched: OrdSet::new(),
            moves: 0,
            elapsed_seconds: 0,
            phase: Phase::Idle,
            difficulty,
        };
        state.check_invariants();
        state
    }

    // === Accessors ===

    /// Cards in slot order.
    #[must_use]
    pub fn cards(&self) -> &Vector<GameCard> {
        &self.cards
    }

    /// Card at a slot.
    #[must_use]
    pub fn card(&self, slot: usize) -> Option<&GameCard> {
        self.cards.get(slot)
    }

    /// Face-up, unresolved slots (at most two).
    #[must_use]
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> &OrdSet<CardId> {
        &self.matched
    }

    /// Number of pairs found.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Completed two-card comparisons.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Seconds on the stopwatch.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Has the first card been flipped?
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Is every pair matched?
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Complete
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Are two cards waiting to be resolved?
    #[must_use]
    pub fn is_resolution_pending(&self) -> bool {
        self.flipped.len() == 2
    }

    /// Should the card at `slot` be shown face up?
    #[must_use]
    pub fn is_face_up(&self, slot: usize) -> bool {
        self.flipped.contains(&slot) || self.is_slot_matched(slot)
    }

    /// Should clicks on `slot` be ignored?
    #[must_use]
    pub fn is_disabled(&self, slot: usize) -> bool {
        self.is_resolution_pending() || self.is_slot_matched(slot)
    }

    fn is_slot_matched(&self, slot: usize) -> bool {
        self.cards
            .get(slot)
            .is_some_and(|card| self.matched.contains(&card.pair))
    }

    /// Counters for a stats panel.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats {
            moves: self.moves,
            matches: self.matched.len(),
            total_pairs: self.total_pairs(),
            elapsed_seconds: self.elapsed_seconds,
            completed: self.is_completed(),
        }
    }

    // === Transitions ===

    /// Attempt to turn a card face up.
    pub(crate) fn flip(&mut self, slot: usize) -> FlipOutcome {
        if self.phase == Phase::Complete {
            return FlipRejection::GameComplete.into();
        }
        let Some(card) = self.cards.get(slot).copied() else {
            return FlipRejection::OutOfRange.into();
        };
        if self.flipped.len() == 2 {
            return FlipRejection::ResolutionPending.into();
        }
        if self.flipped.contains(&slot) {
            return FlipRejection::AlreadyFlipped.into();
        }
        if self.matched.contains(&card.pair) {
            return FlipRejection::AlreadyMatched.into();
        }

        self.phase = Phase::Active;
        self.flipped.push(slot);

        let outcome = match self.flipped[..] {
            [first, second] => {
                self.moves += 1;
                FlipOutcome::SecondCard {
                    slots: [first, second],
                    pair: card.pair,
                    matched: self.cards[first].pairs_with(&card),
                }
            }
            _ => FlipOutcome::FirstCard {
                slot,
                pair: card.pair,
            },
        };

        self.check_invariants();
        outcome
    }

    /// Settle the revealed pair.
    pub(crate) fn resolve(&mut self, resolution: Resolution) {
        match resolution {
            Resolution::Match { pair, slots } => {
                debug_assert_eq!(self.flipped[..], slots[..], "resolving a pair that is not face up");
                self.matched.insert(pair);
                for slot in slots {
                    if let Some(card) = self.cards.get_mut(slot) {
                        card.matched = true;
                    }
                }
            }
            Resolution::Mismatch { slots } => {
                debug_assert_eq!(self.flipped[..], slots[..], "hiding a pair that is not face up");
            }
        }
        self.flipped.clear();
        self.check_invariants();
    }

    /// Record the stopwatch reading.
    pub(crate) fn set_elapsed(&mut self, elapsed_seconds: u32) {
        self.elapsed_seconds = elapsed_seconds;
    }

    /// Is every pair on the board matched?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.total_pairs() > 0 && self.matched.len() == self.total_pairs()
    }

    /// Enter `Complete`. Returns `true` only on the transition itself.
    pub(crate) fn mark_complete(&mut self) -> bool {
        if self.phase != Phase::Active || !self.all_matched() {
            return false;
        }
        self.phase = Phase::Complete;
        self.check_invariants();
        true
    }

    /// Assert the board invariants (debug builds only).
    pub fn check_invariants(&self) {
        debug_assert!(self.flipped.len() <= 2, "more than two cards face up");
        debug_assert!(self.cards.len() % 2 == 0, "odd number of cards");
        debug_assert!(
            self.flipped.len() < 2 || self.flipped[0] != self.flipped[1],
            "same slot flipped twice"
        );
        debug_assert!(
            self.phase != Phase::Complete || self.all_matched(),
            "completed with unmatched pairs"
        );
        debug_assert!(
            self.phase != Phase::Idle || (self.moves == 0 && self.flipped.is_empty()),
            "idle board has activity"
        );

        if cfg!(debug_assertions) {
            let mut counts = std::collections::BTreeMap::<CardId, usize>::new();
            for (i, card) in self.cards.iter().enumerate() {
                debug_assert_eq!(card.slot, i, "card slot does not match its position");
                debug_assert_eq!(
                    card.matched,
                    self.matched.contains(&card.pair),
                    "matched flag out of sync"
                );
                *counts.entry(card.pair).or_default() += 1;
            }
            debug_assert!(counts.values().all(|&c| c == 2), "pair does not appear exactly twice");

            for &slot in &self.flipped {
                debug_assert!(slot < self.cards.len(), "flipped slot out of range");
                debug_assert!(!self.is_slot_matched(slot), "matched card is face up");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> CardId {
        CardId::new(raw)
    }

    /// Board [1, 2, 1, 2].
    fn small_state() -> GameState {
        let cards = [1, 2, 1, 2]
            .into_iter()
            .enumerate()
            .map(|(slot, pair)| GameCard::new(slot, id(pair)))
            .collect();
        GameState::new(Difficulty::Easy, cards)
    }

    #[test]
    fn test_new_state() {
        let state = small_state();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.total_pairs(), 2);
        assert_eq!(state.moves(), 0);
        assert!(state.flipped().is_empty());
        assert!(!state.is_started());
    }

    #[test]
    fn test_first_flip_activates() {
        let mut state = small_state();
        let outcome = state.flip(0);

        assert_eq!(outcome, FlipOutcome::FirstCard { slot: 0, pair: id(1) });
        assert_eq!(state.phase(), Phase::Active);
        assert_eq!(state.moves(), 0);
        assert!(state.is_face_up(0));
        assert!(!state.is_disabled(1));
    }

    #[test]
    fn test_out_of_range_does_not_start() {
        let mut state = small_state();
        assert_eq!(state.flip(4).rejection(), Some(FlipRejection::OutOfRange));
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_same_slot_twice() {
        let mut state = small_state();
        state.flip(0);
        assert_eq!(state.flip(0).rejection(), Some(FlipRejection::AlreadyFlipped));
        assert_eq!(state.flipped(), &[0]);
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn test_second_flip_counts_move() {
        let mut state = small_state();
        state.flip(0);
        let outcome = state.flip(2);

        assert_eq!(
            outcome,
            FlipOutcome::SecondCard {
                slots: [0, 2],
                pair: id(1),
                matched: true,
            }
        );
        assert_eq!(state.moves(), 1);
        assert!(state.is_resolution_pending());
        assert!(state.is_disabled(1));
        assert_eq!(state.flip(1).rejection(), Some(FlipRejection::ResolutionPending));
    }

    #[test]
    fn test_second_flip_compares_pairs() {
        let mut state = small_state();
        state.flip(1);
        assert_eq!(
            state.flip(0),
            FlipOutcome::SecondCard {
                slots: [1, 0],
                pair: id(1),
                matched: false,
            }
        );
    }

    #[test]
    fn test_resolve_match() {
        let mut state = small_state();
        state.flip(0);
        state.flip(2);
        state.resolve(Resolution::Match {
            pair: id(1),
            slots: [0, 2],
        });

        assert!(state.flipped().is_empty());
        assert!(state.matched_pairs().contains(&id(1)));
        assert!(state.card(0).unwrap().matched);
        assert!(state.card(2).unwrap().matched);
        assert!(state.is_face_up(2));
        assert!(state.is_disabled(0));
        assert_eq!(state.flip(0).rejection(), Some(FlipRejection::AlreadyMatched));
    }

    #[test]
    fn test_resolve_mismatch() {
        let mut state = small_state();
        state.flip(0);
        state.flip(1);
        state.resolve(Resolution::Mismatch { slots: [0, 1] });

        assert!(state.flipped().is_empty());
        assert!(state.matched_pairs().is_empty());
        assert!(!state.is_face_up(0));
        assert_eq!(state.moves(), 1);
    }

    #[test]
    fn test_mark_complete_is_edge_triggered() {
        let mut state = small_state();
        assert!(!state.mark_complete());

        for (a, b, pair) in [(0, 2, 1), (1, 3, 2)] {
            state.flip(a);
            state.flip(b);
            state.resolve(Resolution::Match {
                pair: id(pair),
                slots: [a, b],
            });
        }

        assert!(state.all_matched());
        assert!(state.mark_complete());
        assert!(!state.mark_complete());
        assert!(state.is_completed());
        assert_eq!(state.flip(0).rejection(), Some(FlipRejection::GameComplete));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut state = small_state();
        let snapshot = state.clone();
        state.flip(0);

        assert!(snapshot.flipped().is_empty());
        assert_eq!(snapshot.phase(), Phase::Idle);
    }

    #[test]
    fn test_serialization() {
        let mut state = small_state();
        state.flip(1);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
