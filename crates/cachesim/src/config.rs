//! Configuration for the cache simulator.
//!
//! This module defines the structures and enums used to parameterize a simulation run. It provides:
//! 1. **Defaults:** Baseline geometry used when a field is omitted from a JSON document.
//! 2. **Structures:** [`CacheConfig`], the four geometry/policy parameters plus an optional seed.
//! 3. **Enums:** Replacement policy and report output mode, parsable from the short CLI tokens.
//!
//! Configuration is supplied either positionally by the CLI or as a JSON document:
//!
//! ```
//! use cachesim_core::config::{CacheConfig, ReplacementPolicy};
//!
//! let json = r#"{ "num_sets": 64, "block_size": 16, "associativity": 4, "policy": "F" }"#;
//! let config = CacheConfig::from_json(json).unwrap();
//! assert_eq!(config.policy, ReplacementPolicy::Fifo);
//! assert_eq!(config.seed, None);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cache::CacheEntry;
use crate::common::{AddressDecoder, ConfigError};

/// Largest byte size a single `Vec` may allocate.
const MAX_ALLOC_BYTES: usize = isize::MAX.unsigned_abs();

/// Whether `count` elements of `elem_bytes` each fit in one allocation.
const fn fits_allocation(count: usize, elem_bytes: usize) -> bool {
    match count.checked_mul(elem_bytes) {
        Some(bytes) => bytes <= MAX_ALLOC_BYTES,
        None => false,
    }
}

/// Default configuration constants.
///
/// Used when a field is not present in a JSON configuration document.
mod defaults {
    /// Default number of sets.
    pub const NUM_SETS: u64 = 256;

    /// Default block size in bytes (one 32-bit word).
    pub const BLOCK_SIZE: u64 = 4;

    /// Default associativity (1 way = direct-mapped).
    pub const ASSOCIATIVITY: usize = 1;
}

/// Cache replacement policy algorithms.
///
/// Specifies how a victim way is chosen when a miss lands in a full set.
/// Serialized as the single-letter tokens used on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReplacementPolicy {
    /// Evicts a uniformly random way of the set.
    #[serde(rename = "R", alias = "r", alias = "Random", alias = "RANDOM")]
    Random,
    /// Least Recently Used: evicts the way untouched for the longest time.
    #[default]
    #[serde(rename = "L", alias = "l", alias = "Lru", alias = "LRU")]
    Lru,
    /// First In First Out: evicts the way filled longest ago, ignoring hits.
    #[serde(rename = "F", alias = "f", alias = "Fifo", alias = "FIFO")]
    Fifo,
}

impl ReplacementPolicy {
    /// Single-letter command-line token for this policy.
    pub const fn token(self) -> char {
        match self {
            Self::Random => 'R',
            Self::Lru => 'L',
            Self::Fifo => 'F',
        }
    }

    /// Whether the policy keeps a per-set ordering of ways.
    pub const fn tracks_order(self) -> bool {
        matches!(self, Self::Lru | Self::Fifo)
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Random => "Random",
            Self::Lru => "LRU",
            Self::Fifo => "FIFO",
        };
        f.write_str(name)
    }
}

impl FromStr for ReplacementPolicy {
    type Err = ConfigError;

    /// Parses `R`/`L`/`F` or the policy name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R" | "RANDOM" => Ok(Self::Random),
            "L" | "LRU" => Ok(Self::Lru),
            "F" | "FIFO" => Ok(Self::Fifo),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputMode {
    /// Multi-line human-readable report with percentages.
    #[default]
    Verbose,
    /// Single comma-separated line for scripting.
    Compact,
}

impl TryFrom<u8> for OutputMode {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Verbose),
            1 => Ok(Self::Compact),
            other => Err(ConfigError::UnknownOutputMode(other)),
        }
    }
}

/// Geometry and policy of the simulated cache.
///
/// Construct with [`CacheConfig::new`] or deserialize from JSON, then call
/// [`CacheConfig::validate`] (the simulator does so on construction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Number of sets (power of two).
    #[serde(default = "CacheConfig::default_sets")]
    pub num_sets: u64,

    /// Block size in bytes (power of two).
    #[serde(default = "CacheConfig::default_block_size")]
    pub block_size: u64,

    /// Ways per set.
    #[serde(default = "CacheConfig::default_associativity", alias = "assoc")]
    pub associativity: usize,

    /// Replacement policy.
    #[serde(default)]
    pub policy: ReplacementPolicy,

    /// Seed for the Random policy; drawn from the OS when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl CacheConfig {
    /// Returns the default number of sets.
    const fn default_sets() -> u64 {
        defaults::NUM_SETS
    }

    /// Returns the default block size in bytes.
    const fn default_block_size() -> u64 {
        defaults::BLOCK_SIZE
    }

    /// Returns the default associativity.
    const fn default_associativity() -> usize {
        defaults::ASSOCIATIVITY
    }

    /// Creates an unseeded configuration.
    ///
    /// # Arguments
    ///
    /// * `num_sets` - Number of sets (power of two).
    /// * `block_size` - Block size in bytes (power of two).
    /// * `associativity` - Ways per set (at least 1).
    /// * `policy` - Replacement policy.
    pub const fn new(
        num_sets: u64,
        block_size: u64,
        associativity: usize,
        policy: ReplacementPolicy,
    ) -> Self {
        Self {
            num_sets,
            block_size,
            associativity,
            policy,
            seed: None,
        }
    }

    /// Returns this configuration with the Random policy seeded.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a JSON configuration document.
    ///
    /// Missing fields take their defaults; unknown fields are rejected. The result is
    /// not validated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Checks every constraint the simulator relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: non-power-of-two sets or block size,
    /// zero associativity, or a grid too large to allocate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let _ = self.decoder()?;
        if self.associativity == 0 {
            return Err(ConfigError::ZeroAssociativity);
        }
        let _ = self.total_entries()?;
        Ok(())
    }

    /// Builds the address decoder for this geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the block size or set count is not a power of two.
    pub const fn decoder(&self) -> Result<AddressDecoder, ConfigError> {
        AddressDecoder::new(self.block_size, self.num_sets)
    }

    /// Total number of entries (`num_sets * associativity`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::GeometryOverflow`] if the product does not fit in `usize`,
    /// or if the entry grid or the per-set policy queues would exceed the largest
    /// allocation the platform allows.
    pub fn total_entries(&self) -> Result<usize, ConfigError> {
        usize::try_from(self.num_sets)
            .ok()
            .filter(|&sets| fits_allocation(sets, size_of::<VecDeque<usize>>()))
            .and_then(|sets| sets.checked_mul(self.associativity))
            .filter(|&entries| fits_allocation(entries, size_of::<CacheEntry>()))
            .ok_or(ConfigError::GeometryOverflow {
                num_sets: self.num_sets,
                associativity: self.associativity,
            })
    }

    /// Cache capacity in bytes, saturating on overflow.
    pub const fn capacity_bytes(&self) -> u64 {
        self.num_sets
            .saturating_mul(self.block_size)
            .saturating_mul(self.associativity as u64)
    }
}

impl Default for CacheConfig {
    /// Direct-mapped, 256 sets of 4-byte blocks, LRU, unseeded.
    fn default() -> Self {
        Self::new(
            defaults::NUM_SETS,
            defaults::BLOCK_SIZE,
            defaults::ASSOCIATIVITY,
            ReplacementPolicy::Lru,
        )
    }
}
