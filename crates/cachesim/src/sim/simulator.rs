//! Simulator: owns the cache store, the replacement policy and the counters.
//!
//! Each address is resolved completely before the next one is looked at:
//!
//! ```text
//!            decode
//! address ───────────► lookup(set, tag)
//!                        │
//!            ┌── found ──┴── not found ─────────────┐
//!            ▼                                      ▼
//!     policy.record_hit                    classify(set)
//!          HIT                    ┌── empty way ────┴── set full ──┐
//!                                 ▼                                ▼
//!                        insert + record_insert          policy.evict + insert
//!                             COMPULSORY                 CAPACITY | CONFLICT
//! ```

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, trace};

use crate::cache::policies::{self, BoxedPolicy, ReplacementPolicy};
use crate::cache::{CacheStore, classify};
use crate::common::{AddressDecoder, ConfigError, DecodedAddress};
use crate::config::CacheConfig;
use crate::stats::{AccessOutcome, SimStats};

/// Trace-driven set-associative cache simulator.
#[derive(Debug)]
pub struct CacheSimulator {
    config: CacheConfig,
    decoder: AddressDecoder,
    store: CacheStore,
    policy: BoxedPolicy,
    stats: SimStats,
}

impl CacheSimulator {
    /// Creates a simulator for `config`.
    ///
    /// The Random policy draws from a generator seeded with `config.seed`, or from OS
    /// entropy when no seed is set.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::with_rng(config, rng)
    }

    /// Creates a simulator whose Random policy draws from `rng`.
    ///
    /// `config.seed` is ignored. Other policies never consume the generator.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn with_rng<R>(config: &CacheConfig, rng: R) -> Result<Self, ConfigError>
    where
        R: RngCore + Send + Sync + 'static,
    {
        config.validate()?;
        let decoder = config.decoder()?;
        let num_sets = config.total_entries()? / config.associativity;
        let ways = config.associativity;

        debug!(
            num_sets,
            block_size = config.block_size,
            ways,
            policy = %config.policy,
            seed = ?config.seed,
            "cache simulator initialized"
        );

        Ok(Self {
            config: config.clone(),
            decoder,
            store: CacheStore::new(num_sets, ways),
            policy: policies::build(config.policy, num_sets, ways, rng),
            stats: SimStats::default(),
        })
    }

    /// Simulates one access and returns its outcome.
    pub fn access(&mut self, address: u64) -> AccessOutcome {
        let DecodedAddress { tag, set_index, .. } = self.decoder.decode(address);

        let outcome = if let Some(way) = self.store.lookup(set_index, tag) {
            self.policy.record_hit(set_index, way);
            AccessOutcome::Hit
        } else {
            let miss = classify(&self.store, set_index);
            if let Some(way) = miss.empty_way {
                self.store.insert(set_index, way, tag);
                self.policy.record_insert(set_index, way);
            } else {
                let way = self.policy.evict(set_index);
                if let Some(victim) = self.store.entry(set_index, way) {
                    trace!(set_index, way, victim_tag = victim.tag, tag, "evict");
                }
                self.store.insert(set_index, way, tag);
            }
            AccessOutcome::Miss(miss.kind)
        };

        self.stats.record(outcome);
        trace!(address = format_args!("{address:#x}"), set_index, tag, ?outcome, "access");
        outcome
    }

    /// Feeds every address of `trace` through the cache, in order.
    ///
    /// Returns the counters accumulated so far, including any accesses made before
    /// this call.
    pub fn run<I>(&mut self, trace: I) -> SimStats
    where
        I: IntoIterator<Item = u64>,
    {
        for address in trace {
            let _ = self.access(address);
        }
        let stats = self.stats;
        info!(
            accesses = stats.total_accesses,
            hits = stats.hits,
            compulsory = stats.misses.compulsory,
            capacity = stats.misses.capacity,
            conflict = stats.misses.conflict,
            "trace simulated"
        );
        stats
    }

    /// Whether the block containing `address` is currently cached.
    pub fn contains(&self, address: u64) -> bool {
        let DecodedAddress { tag, set_index, .. } = self.decoder.decode(address);
        self.store.lookup(set_index, tag).is_some()
    }

    /// Counters accumulated so far.
    pub const fn stats(&self) -> SimStats {
        self.stats
    }

    /// The configuration this simulator was built from.
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// The address decoder for this geometry.
    pub const fn decoder(&self) -> &AddressDecoder {
        &self.decoder
    }

    /// Read-only view of the set/way grid.
    pub const fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Read-only view of the replacement policy.
    pub fn policy(&self) -> &dyn ReplacementPolicy {
        self.policy.as_ref()
    }
}

/// Runs `trace` on a fresh simulator for `config`.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the configuration is invalid.
pub fn simulate<I>(config: &CacheConfig, trace: I) -> Result<SimStats, ConfigError>
where
    I: IntoIterator<Item = u64>,
{
    Ok(CacheSimulator::new(config)?.run(trace))
}
