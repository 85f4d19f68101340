//! Random Replacement Policy.
//!
//! Evicts a uniformly random way of the set. The random source is injected by the
//! caller so a seeded generator makes runs reproducible; there is no global state.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::ReplacementPolicy;

/// Random Policy state.
pub struct RandomPolicy<R = StdRng> {
    /// Number of ways in the cache.
    ways: usize,
    /// Source of randomness for victim selection.
    rng: R,
}

impl<R: RngCore> RandomPolicy<R> {
    /// Creates a new Random policy drawing from `rng`.
    ///
    /// # Arguments
    ///
    /// * `ways` - The associativity (number of ways) of the cache.
    /// * `rng` - The random source.
    pub const fn new(ways: usize, rng: R) -> Self {
        Self { ways, rng }
    }
}

impl RandomPolicy<StdRng> {
    /// Creates a Random policy with a reproducible, seeded generator.
    pub fn seeded(ways: usize, seed: u64) -> Self {
        Self::new(ways, StdRng::seed_from_u64(seed))
    }
}

impl<R> fmt::Debug for RandomPolicy<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomPolicy")
            .field("ways", &self.ways)
            .finish_non_exhaustive()
    }
}

impl<R: RngCore + Send + Sync> ReplacementPolicy for RandomPolicy<R> {
    fn record_hit(&mut self, _set: usize, _way: usize) {}

    fn record_insert(&mut self, _set: usize, _way: usize) {}

    /// Picks a way uniformly in `[0, ways)`.
    fn evict(&mut self, _set: usize) -> usize {
        self.rng.random_range(0..self.ways)
    }
}
