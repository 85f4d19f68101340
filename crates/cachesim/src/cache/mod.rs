//! Set-Associative Cache Model.
//!
//! This module implements the storage and decision logic of a single cache level:
//! 1. **Store:** The set/way grid of valid bits and tags.
//! 2. **Classification:** Compulsory, capacity and conflict miss attribution.
//! 3. **Policies:** Victim selection (LRU, FIFO, Random).
//!
//! The per-access control flow that ties these together lives in
//! [`sim::simulator`](crate::sim::simulator).

/// Miss classification (compulsory, capacity, conflict).
pub mod classify;

/// Cache replacement policy implementations (FIFO, LRU, Random).
pub mod policies;

/// Set/way entry storage.
pub mod store;

pub use classify::{MissClassification, MissKind, classify};
pub use policies::ReplacementPolicy;
pub use store::{CacheEntry, CacheStore};
