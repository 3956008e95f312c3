//! The memory game state machine.
//!
//! `MemoryGame` ties a [`GameState`] to the deck builder, a logical-time
//! scheduler and the registered observers:
//!
//! ```text
//! Idle --flip--> Active --last pair matched--> Complete
//!   ^               |                              |
//!   +---- new_game / set_difficulty / deal_layout -+
//! ```
//!
//! Host input (`flip`) and time (`advance`) are the only drivers. Delayed
//! pair resolution and stopwatch ticks are scheduler entries, and every
//! deal cancels all of them, so nothing from an old board can touch a new
//! one.

use std::time::Duration;

use tracing::{debug, info};

use super::flip::{FlipOutcome, Resolution};
use super::state::{GameState, Phase};
use super::stats::GameStats;
use super::view::{BoardLayout, CardView};
use crate::cards::{CardCatalog, CardId, GameCard};
use crate::core::{DeckError, Difficulty, GameConfig, GameRng, Result};
use crate::deck::DeckBuilder;
use crate::events::{CompletionEvent, GameEvent, GameObserver};
use crate::timing::{Scheduler, Stopwatch, TimerId};

/// Scheduler payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GameTimer {
    Tick,
    Resolve(Resolution),
}

/// Builder for creating a [`MemoryGame`].
///
/// ## Example
///
/// ```
/// use wwii_memory::core::Difficulty;
/// use wwii_memory::game::MemoryGameBuilder;
///
/// let game = MemoryGameBuilder::new()
///     .difficulty(Difficulty::Easy)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.state().cards().len(), 8);
/// ```
pub struct MemoryGameBuilder {
    config: GameConfig,
    catalog: CardCatalog,
    seed: Option<u64>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Default for MemoryGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            catalog: CardCatalog::wwii(),
            seed: None,
            observers: Vec::new(),
        }
    }
}

impl MemoryGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Starting difficulty.
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.config.default_difficulty = difficulty;
        self
    }

    /// Catalog to deal from (defaults to the WWII catalog).
    pub fn catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Fix the shuffle seed. Without one the seed comes from the OS.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Register an observer before the first deal, so it sees `NewGame`.
    pub fn observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Validate the configuration and deal the first board.
    pub fn build(self) -> Result<MemoryGame> {
        self.config.validate()?;
        let deck = DeckBuilder::new(self.catalog, &self.config)?;
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let difficulty = self.config.default_difficulty;
        let mut game = MemoryGame {
            config: self.config,
            deck,
            rng,
            state: GameState::new(difficulty, Vec::new()),
            scheduler: Scheduler::new(),
            stopwatch: Stopwatch::new(),
            pending: None,
            completion: None,
            observers: self.observers,
        };
        game.new_game();
        Ok(game)
    }
}

/// A single-player memory game.
pub struct MemoryGame {
    config: GameConfig,
    deck: DeckBuilder,
    rng: GameRng,
    state: GameState,
    scheduler: Scheduler<GameTimer>,
    stopwatch: Stopwatch,
    /// Resolution entry for the face-up pair.
    pending: Option<TimerId>,
    completion: Option<CompletionEvent>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl std::fmt::Debug for MemoryGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGame")
            .field("state", &self.state)
            .field("now", &self.scheduler.now())
            .field("pending", &self.pending)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl MemoryGame {
    /// Game over the WWII catalog with an OS-chosen seed.
    pub fn new(config: GameConfig) -> Result<Self> {
        MemoryGameBuilder::new().config(config).build()
    }

    /// Start a builder.
    pub fn builder() -> MemoryGameBuilder {
        MemoryGameBuilder::new()
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Read access ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cheap copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        self.deck.catalog()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Seed of the shuffle RNG, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// When the next timer fires, if any. Hosts can sleep until then.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    /// Is the stopwatch running?
    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    /// Is a face-up pair waiting for its delay?
    #[must_use]
    pub fn is_resolution_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The notification sent when this game was completed.
    #[must_use]
    pub fn completion(&self) -> Option<&CompletionEvent> {
        self.completion.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> GameStats {
        self.state.stats()
    }

    /// Grid dimensions for the current board.
    #[must_use]
    pub fn layout(&self) -> BoardLayout {
        let columns = self.config.settings(self.difficulty()).columns;
        BoardLayout::new(self.state.cards().len(), columns)
    }

    /// How every slot should be drawn, in slot order.
    #[must_use]
    pub fn board(&self) -> Vec<CardView<'_>> {
        self.state
            .cards()
            .iter()
            .map(|card| {
                let face_up = self.state.is_face_up(card.slot);
                CardView {
                    slot: card.slot,
                    pair: card.pair,
                    face_up,
                    disabled: self.state.is_disabled(card.slot),
                    matched: card.matched,
                    definition: face_up.then(|| self.deck.catalog().get(card.pair)).flatten(),
                }
            })
            .collect()
    }

    // === Input ===

    /// Click on a card.
    pub fn flip(&mut self, slot: usize) -> FlipOutcome {
        let was_idle = self.state.phase() == Phase::Idle;
        let outcome = self.state.flip(slot);

        match outcome {
            FlipOutcome::Rejected { reason } => {
                debug!(slot, %reason, "flip ignored");
            }
            FlipOutcome::FirstCard { slot, pair } => {
                if was_idle {
                    self.start();
                }
                debug!(slot, %pair, "first card");
                self.emit(GameEvent::CardFlipped { slot, pair });
            }
            FlipOutcome::SecondCard { slots, pair, matched } => {
                debug!(?slots, %pair, matched, moves = self.state.moves(), "second card");
                self.emit(GameEvent::CardFlipped {
                    slot: slots[1],
                    pair,
                });
                self.emit(GameEvent::PairRevealed {
                    slots,
                    matched,
                    moves: self.state.moves(),
                });
                self.schedule_resolution(slots, pair, matched);
            }
        }

        outcome
    }

    /// Move logical time forward, firing resolutions and ticks that fall
    /// due, in order.
    ///
    /// Consecutive ticks with nothing else due between them are counted in
    /// one step and reported as a single `Tick` event, so any `by` up to
    /// `Duration::MAX` is cheap.
    pub fn advance(&mut self, by: Duration) {
        let until = self.scheduler.now().saturating_add(by);

        while let Some(fired) = self.scheduler.pop_due(until) {
            match fired.payload {
                GameTimer::Tick => {
                    if !self.stopwatch.owns(fired.id) {
                        continue;
                    }
                    // Ticks strictly before the next other entry cannot
                    // interleave with it
                    let limit = match self.scheduler.next_due_except(fired.id) {
                        Some(other) => until.min(other.saturating_sub(Duration::from_nanos(1))),
                        None => until,
                    };
                    let skipped = self.scheduler.fast_forward(fired.id, limit);
                    let count = skipped.saturating_add(1);
                    if let Some(elapsed_seconds) = self.stopwatch.record_ticks(fired.id, count) {
                        self.state.set_elapsed(elapsed_seconds);
                        self.emit(GameEvent::Tick { elapsed_seconds });
                    }
                }
                GameTimer::Resolve(resolution) => {
                    if self.pending == Some(fired.id) {
                        self.pending = None;
                        self.resolve(resolution);
                    }
                }
            }
        }

        self.scheduler.settle(until);
    }

    /// Deal a new shuffled board at the current difficulty.
    pub fn new_game(&mut self) {
        let difficulty = self.state.difficulty();
        let cards = self.deck.build(difficulty, &mut self.rng);
        self.deal(difficulty, cards);
    }

    /// Switch difficulty and deal. Returns `false` (and keeps the current
    /// game) when `difficulty` is already selected.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if difficulty == self.state.difficulty() {
            return false;
        }
        let cards = self.deck.build(difficulty, &mut self.rng);
        self.deal(difficulty, cards);
        true
    }

    /// Deal a prepared board at the current difficulty.
    pub fn deal_layout(&mut self, layout: &[CardId]) -> std::result::Result<(), DeckError> {
        let difficulty = self.state.difficulty();
        let cards = self.deck.from_layout(difficulty, layout)?;
        self.deal(difficulty, cards);
        Ok(())
    }

    // === Transitions ===

    fn deal(&mut self, difficulty: Difficulty, cards: Vec<GameCard>) {
        self.scheduler.cancel_all();
        self.stopwatch.reset();
        self.pending = None;
        self.completion = None;
        self.state = GameState::new(difficulty, cards);

        let total_pairs = self.state.total_pairs();
        info!(%difficulty, total_pairs, generation = self.scheduler.generation(), "new game");
        self.emit(GameEvent::NewGame {
            difficulty,
            total_pairs,
        });
    }

    fn start(&mut self) {
        let interval = self.config.tick_interval();
        self.stopwatch.start(&mut self.scheduler, interval, GameTimer::Tick);
        debug!(difficulty = %self.state.difficulty(), "game started");
        self.emit(GameEvent::Started);
    }

    fn schedule_resolution(&mut self, slots: [usize; 2], pair: CardId, matched: bool) {
        let (delay, resolution) = if matched {
            (self.config.match_delay(), Resolution::Match { pair, slots })
        } else {
            (self.config.mismatch_delay(), Resolution::Mismatch { slots })
        };
        let id = self
            .scheduler
            .schedule_once(delay, GameTimer::Resolve(resolution));
        self.pending = Some(id);
    }

    fn resolve(&mut self, resolution: Resolution) {
        self.state.resolve(resolution);

        match resolution {
            Resolution::Match { pair, slots } => {
                debug!(%pair, matched = self.state.matched_count(), "pair matched");
                self.emit(GameEvent::PairMatched { pair, slots });
                if self.state.all_matched() {
                    self.complete();
                }
            }
            Resolution::Mismatch { slots } => {
                debug!(?slots, "pair hidden");
                self.emit(GameEvent::PairHidden { slots });
            }
        }
    }

    fn complete(&mut self) {
        if !self.state.mark_complete() {
            return;
        }
        self.stopwatch.stop(&mut self.scheduler);

        let event = CompletionEvent::new(
            self.config.block_id.clone(),
            &self.config.scoring,
            self.state.difficulty(),
            self.state.moves(),
            self.state.elapsed_seconds(),
            self.state.matched_count(),
        );
        info!(
            difficulty = %event.data.difficulty,
            moves = event.data.moves,
            seconds = event.time_spent,
            score = event.score,
            "game complete"
        );

        self.completion = Some(event.clone());
        self.emit(GameEvent::Completed(event));
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
            if let GameEvent::Completed(completion) = &event {
                observer.on_completion(completion);
            }
        }
    }
}
