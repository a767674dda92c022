//! # RandomNumberGenerator
//!
//! Every stochastic operation in the solver (initialisation, selection,
//! crossover and mutation) takes a `&mut RandomNumberGenerator` instead of
//! reaching for a global generator, so a run seeded with the same value is
//! reproducible.
//!
//! ## Example
//!
//! ```rust
//! use tourga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let mut stops = vec![1, 2, 3, 4];
//! rng.shuffle(&mut stops);
//!
//! let picked = rng.sample_distinct(10, 3);
//! assert_eq!(picked.len(), 3);
//! ```

use rand::{rngs::StdRng, seq::index, seq::SliceRandom, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` with the handful of draws
/// the genetic operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniform float in `[0, 1)`.
    pub fn probability(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns a uniform index in `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero.
    pub fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Shuffles `items` in place with a uniform random permutation.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Draws `amount` distinct indices from `[0, length)` without replacement.
    ///
    /// The indices come back in the order they were drawn, not sorted.
    ///
    /// # Panics
    ///
    /// Panics if `amount > length`.
    pub fn sample_distinct(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, length, amount).into_vec()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
