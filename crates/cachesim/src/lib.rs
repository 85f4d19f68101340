//! Set-associative cache simulator library.
//!
//! This crate replays a trace of memory addresses against a single set-associative
//! cache and attributes every access to one outcome:
//! 1. **Common:** Address decomposition (tag / set index / offset) and error types.
//! 2. **Cache:** The set/way store, miss classification and replacement policies.
//! 3. **Simulation:** The per-access simulator and the binary trace loader.
//! 4. **Statistics:** Hit and miss counters, derived rates and report rendering.
//!
//! ```
//! use cachesim_core::{CacheConfig, CacheSimulator};
//! use cachesim_core::config::ReplacementPolicy;
//!
//! let config = CacheConfig::new(2, 4, 1, ReplacementPolicy::Lru);
//! let mut sim = CacheSimulator::new(&config).unwrap();
//! let stats = sim.run([0x0, 0x4, 0x8, 0x0]);
//! assert_eq!(stats.misses.compulsory, 2);
//! assert_eq!(stats.misses.capacity, 2);
//! ```

/// Set/way storage, miss classification and replacement policies.
pub mod cache;
/// Common types (address decoding, errors).
pub mod common;
/// Simulator configuration (geometry, policy, output mode).
pub mod config;
/// Simulator and trace loader.
pub mod sim;
/// Simulation statistics and reports.
pub mod stats;

/// Cache geometry and policy; validate with `CacheConfig::validate`.
pub use crate::config::CacheConfig;
/// Main simulator type; construct with `CacheSimulator::new`.
pub use crate::sim::CacheSimulator;
/// Counters returned at the end of a run.
pub use crate::stats::SimStats;
