//! Cache Replacement Policies.
//!
//! Per-set bookkeeping used to pick a victim way when a miss lands in a full set.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used, ordered by last touch.
//! - `Fifo`: First-In, First-Out, ordered by fill time.
//! - `Random`: Uniform choice from an injected random source.
//!
//! The ordered policies keep, for every set, a queue of way indices running from the
//! next victim (front) to the most protected way (back). Each valid way appears in its
//! set's queue exactly once.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Random replacement policy.
pub mod random;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use random::RandomPolicy;

use std::fmt;

use rand::RngCore;

use crate::config::ReplacementPolicy as PolicyType;

/// Trait for cache replacement policies.
///
/// The simulator calls exactly one of these per access: `record_hit` on a hit,
/// `record_insert` when a miss fills an empty way, or `evict` when a miss lands in a
/// full set.
pub trait ReplacementPolicy: fmt::Debug + Send + Sync {
    /// Updates the policy state after a hit.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    /// * `way` - The way that hit.
    fn record_hit(&mut self, set: usize, way: usize);

    /// Updates the policy state after a previously empty way was filled.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    /// * `way` - The way that was filled.
    fn record_insert(&mut self, set: usize, way: usize);

    /// Selects the way to evict from a full set.
    ///
    /// The caller immediately refills the returned way, so implementations account
    /// for the refill as part of the eviction.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    ///
    /// # Returns
    ///
    /// The index of the way to overwrite.
    fn evict(&mut self, set: usize) -> usize;

    /// Current eviction order of `set`, next victim first.
    ///
    /// Returns `None` for policies that keep no ordering.
    fn order(&self, _set: usize) -> Option<Vec<usize>> {
        None
    }
}

/// Boxed policy as owned by the simulator.
pub type BoxedPolicy = Box<dyn ReplacementPolicy>;

/// Builds the policy selected by a configuration.
///
/// # Arguments
///
/// * `policy` - Which policy to build.
/// * `sets` - The number of sets in the cache.
/// * `ways` - The associativity of the cache.
/// * `rng` - Random source; only consumed by the Random policy.
pub fn build<R>(policy: PolicyType, sets: usize, ways: usize, rng: R) -> BoxedPolicy
where
    R: RngCore + Send + Sync + 'static,
{
    match policy {
        PolicyType::Random => Box::new(RandomPolicy::new(ways, rng)),
        PolicyType::Lru => Box::new(LruPolicy::new(sets, ways)),
        PolicyType::Fifo => Box::new(FifoPolicy::new(sets, ways)),
    }
}
