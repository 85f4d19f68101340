//! Simulation driver and trace loading.
//!
//! Provides the per-access simulator and utilities for reading address traces
//! from disk.

/// Binary trace file loader.
pub mod loader;

/// Trace-driven cache simulator.
pub mod simulator;

pub use loader::{load_trace, parse_trace};
pub use simulator::{CacheSimulator, simulate};
