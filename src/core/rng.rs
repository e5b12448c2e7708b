//! Seedable random source for initial arrow directions.
//!
//! Boards draw one direction per cell at construction. Passing a `GameRng`
//! with a fixed seed makes the whole layout reproducible.
//!
//! ```
//! use octa_core::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.random_direction(), b.random_direction());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::Direction;

/// Deterministic RNG used for board setup.
///
/// Uses ChaCha8 so the same seed yields the same layout on every platform.
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

    /// Create an RNG seeded from the process-wide entropy source.
    ///
    /// The chosen seed is kept so a surprising board can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly random direction.
    pub fn random_direction(&mut self) -> Direction {
        Direction::from_index(self.gen_range_usize(0..Direction::COUNT))
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
