//! Deterministic random number generation for dealing boards.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Serializable**: O(1) state capture and restore
//! - **Unbiased**: Shuffling is a textbook Fisher-Yates pass
//!
//! ```
//! use wwii_memory::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = [1, 2, 3, 4, 5, 6];
//! let mut right = left;
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable RNG used by the deck builder.
///
/// Uses ChaCha8 so that a recorded seed replays the exact same sequence of
/// boards on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is still recorded, so a game started this way can be
    /// replayed through [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..=upper`.
    pub fn gen_index_inclusive(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }

    /// Shuffle a slice in place.
    ///
    /// Walks from the last index down to 1 and swaps element `i` with a
    /// uniformly chosen element at an index `<= i`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index_inclusive(i);
            slice.swap(i, j);
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many boards have been dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed the RNG was created with
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
