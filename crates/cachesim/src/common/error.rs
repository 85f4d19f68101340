//! Error definitions.
//!
//! This module defines the error taxonomy of the simulator. It provides:
//! 1. **Configuration errors:** Invalid geometry or an unknown policy token, raised before any
//!    address is simulated.
//! 2. **Trace errors:** Malformed or unreadable trace input, raised by the loader.
//! 3. **Umbrella error:** [`SimError`], which front ends propagate with `?`.
//!
//! There is no per-access error: once a simulator is constructed, every address is
//! classifiable.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid cache configuration.
///
/// Raised at construction time; the simulation never starts with a bad configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The number of sets is not a power of two (zero included).
    #[error("number of sets must be a power of two, got {0}")]
    SetsNotPowerOfTwo(u64),

    /// The block size is not a power of two (zero included).
    #[error("block size must be a power of two, got {0}")]
    BlockSizeNotPowerOfTwo(u64),

    /// The associativity is zero.
    #[error("associativity must be at least 1")]
    ZeroAssociativity,

    /// The set/way grid does not fit in addressable memory.
    #[error("cache of {num_sets} sets x {associativity} ways is too large to simulate")]
    GeometryOverflow {
        /// Requested number of sets.
        num_sets: u64,
        /// Requested associativity.
        associativity: usize,
    },

    /// The policy token is not one of the recognized replacement policies.
    #[error("unknown replacement policy '{0}' (expected R, L or F)")]
    UnknownPolicy(String),

    /// The output mode is not one of the recognized report formats.
    #[error("unknown output mode {0} (expected 0 or 1)")]
    UnknownOutputMode(u8),

    /// A JSON configuration document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Parse(String),
}

/// Malformed or unreadable address trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace length is not a multiple of the record size.
    #[error("trace is truncated: {len} bytes is not a multiple of {record} (trailing {trailing} bytes)")]
    Truncated {
        /// Total length of the trace in bytes.
        len: usize,
        /// Size of one address record in bytes.
        record: usize,
        /// Number of bytes past the last complete record.
        trailing: usize,
    },

    /// The trace file could not be read.
    #[error("could not read trace '{}': {source}", path.display())]
    Io {
        /// Path of the trace file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Any error surfaced by the simulator library.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Malformed trace.
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// Report serialization failed.
    #[error("could not serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Convenience alias for results carrying a [`SimError`].
pub type Result<T, E = SimError> = std::result::Result<T, E>;
