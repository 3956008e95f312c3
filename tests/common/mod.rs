//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use wwii_memory::{CardId, Difficulty, EventLog, MemoryGame};

pub const MATCH_DELAY: Duration = Duration::from_millis(1000);
pub const MISMATCH_DELAY: Duration = Duration::from_millis(1500);
pub const SECOND: Duration = Duration::from_secs(1);

/// Route engine logs to the test harness. Set `RUST_LOG=wwii_memory=debug`
/// to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn ids(raw: &[u32]) -> Vec<CardId> {
    raw.iter().copied().map(CardId::new).collect()
}

/// Easy game with a fixed board and an event log attached.
///
/// The log is cleared after dealing, so it only holds events caused by the
/// test itself.
pub fn easy_game_with_layout(layout: &[u32]) -> (MemoryGame, EventLog) {
    init_tracing();
    let log = EventLog::new();
    let mut game = MemoryGame::builder()
        .difficulty(Difficulty::Easy)
        .seed(42)
        .observer(log.clone())
        .build()
        .expect("default config builds");
    game.deal_layout(&ids(layout)).expect("layout is valid");
    log.clear();
    (game, log)
}

/// The layout [A, B, A, B, C, D, C, D].
pub fn scenario_game() -> (MemoryGame, EventLog) {
    easy_game_with_layout(&[1, 2, 1, 2, 3, 4, 3, 4])
}

/// Slots of each pair, in pair order of first appearance.
pub fn pair_slots(game: &MemoryGame) -> Vec<(usize, usize)> {
    let cards = game.state().cards();
    let mut pairs = Vec::new();
    for (i, card) in cards.iter().enumerate() {
        if let Some(j) = cards.iter().skip(i + 1).position(|other| other.pair == card.pair) {
            pairs.push((i, i + 1 + j));
        }
    }
    pairs
}
