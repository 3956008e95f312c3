//! Deck builder.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::cards::{CardCatalog, CardId, GameCard};
use crate::core::{CatalogPolicy, DeckError, Difficulty, GameConfig, GameRng};

/// Deals boards from a catalog.
///
/// ## Example
///
/// ```
/// use wwii_memory::cards::CardCatalog;
/// use wwii_memory::core::{Difficulty, GameConfig, GameRng};
/// use wwii_memory::deck::DeckBuilder;
///
/// let builder = DeckBuilder::new(CardCatalog::wwii(), &GameConfig::default()).unwrap();
/// let deck = builder.build(Difficulty::Easy, &mut GameRng::new(7));
///
/// assert_eq!(deck.len(), 8);
/// assert!(deck.iter().enumerate().all(|(i, card)| card.slot == i));
/// ```
#[derive(Clone, Debug)]
pub struct DeckBuilder {
    catalog: CardCatalog,
    /// Resolved pair count per difficulty, indexed like `Difficulty::ALL`.
    pair_counts: [usize; 3],
}

impl DeckBuilder {
    /// Create a builder, resolving pair counts for every difficulty.
    ///
    /// Fails when the catalog is empty, or when it is too short for some
    /// difficulty and the policy is [`CatalogPolicy::Strict`].
    pub fn new(catalog: CardCatalog, config: &GameConfig) -> Result<Self, DeckError> {
        if catalog.is_empty() {
            return Err(DeckError::EmptyCatalog);
        }

        let mut pair_counts = [0; 3];
        for (slot, difficulty) in Difficulty::ALL.into_iter().enumerate() {
            let required = config.settings(difficulty).pairs;
            let available = catalog.len();

            pair_counts[slot] = if required <= available {
                required
            } else {
                match config.catalog_policy {
                    CatalogPolicy::Strict => {
                        return Err(DeckError::CatalogTooSmall {
                            difficulty,
                            required,
                            available,
                        });
                    }
                    CatalogPolicy::Truncate => {
                        debug!(%difficulty, required, available, "truncating deck to catalog size");
                        available
                    }
                }
            };
        }

        Ok(Self {
            catalog,
            pair_counts,
        })
    }

    /// The catalog cards are drawn from.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Number of pairs dealt for a difficulty.
    #[must_use]
    pub fn pair_count(&self, difficulty: Difficulty) -> usize {
        self.pair_counts[difficulty_index(difficulty)]
    }

    /// Deal a shuffled board.
    ///
    /// Takes the first `K` catalog definitions, duplicates them and
    /// shuffles the result. Slot `i` of the returned deck has `slot == i`.
    #[must_use]
    pub fn build(&self, difficulty: Difficulty, rng: &mut GameRng) -> Vec<GameCard> {
        let mut pairs = self.unshuffled(difficulty);
        rng.shuffle(&mut pairs);
        debug!(%difficulty, cards = pairs.len(), seed = rng.seed(), "dealt board");
        deal(&pairs)
    }

    /// Pair ids in deal order before shuffling: `[d0..dK-1, d0..dK-1]`.
    #[must_use]
    pub fn unshuffled(&self, difficulty: Difficulty) -> Vec<CardId> {
        let selected = self.catalog.first(self.pair_count(difficulty));
        selected
            .iter()
            .chain(selected.iter())
            .map(|definition| definition.id)
            .collect()
    }

    /// Deal a board in a fixed order.
    ///
    /// Every id must be in the catalog and appear exactly twice, and the
    /// layout must have as many cards as the difficulty deals.
    pub fn from_layout(
        &self,
        difficulty: Difficulty,
        layout: &[CardId],
    ) -> Result<Vec<GameCard>, DeckError> {
        let expected = self.pair_count(difficulty) * 2;
        if layout.len() != expected {
            return Err(DeckError::LayoutSize {
                difficulty,
                expected,
                actual: layout.len(),
            });
        }

        let mut counts: FxHashMap<CardId, usize> = FxHashMap::default();
        for &id in layout {
            if !self.catalog.contains(id) {
                return Err(DeckError::UnknownCard { id });
            }
            *counts.entry(id).or_default() += 1;
        }

        // Report in layout order so the error is deterministic
        for &id in layout {
            let count = counts[&id];
            if count != 2 {
                return Err(DeckError::UnpairedCard { id, count });
            }
        }

        Ok(deal(layout))
    }
}

fn deal(pairs: &[CardId]) -> Vec<GameCard> {
    pairs
        .iter()
        .enumerate()
        .map(|(slot, &pair)| GameCard::new(slot, pair))
        .collect()
}

fn difficulty_index(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Medium => 1,
        Difficulty::Hard => 2,
    }
}
