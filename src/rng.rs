//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single random source of a run.
//! The orchestrator owns one and lends it to every strategy call, so a seeded
//! generator makes a whole run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use triga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let value = rng.uniform(-1.0, 1.0);
//! assert!((-1.0..1.0).contains(&value));
//!
//! let draw = rng.draw();
//! assert!((0.0..1.0).contains(&draw));
//! ```

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` with the draws the genetic
/// operators need.
#[derive(Debug, Clone)]
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

    /// Returns a float drawn uniformly from `[from, to)`.
    ///
    /// Callers guarantee `from < to`.
    pub fn uniform(&mut self, from: f64, to: f64) -> f64 {
        self.rng.gen_range(from..to)
    }

    /// Returns an integer drawn uniformly from `[from, to]`.
    ///
    /// Callers guarantee `from <= to`.
    pub fn uniform_inclusive(&mut self, from: i64, to: i64) -> i64 {
        self.rng.gen_range(from..=to)
    }

    /// Returns a float drawn uniformly from `[0, 1)`.
    pub fn draw(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns an index drawn uniformly from `[low, high)`.
    ///
    /// Callers guarantee `low < high`.
    pub fn index_in(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..high)
    }

    /// Returns an index drawn uniformly from `[0, len)`.
    pub fn index(&mut self, len: usize) -> usize {
        self.index_in(0, len)
    }

    /// Flips a fair coin.
    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Draws `amount` distinct indices from `[0, len)`.
    ///
    /// Callers guarantee `amount <= len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, len, amount).into_vec()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
