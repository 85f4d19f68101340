//! Common types shared across the simulator.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Address decomposition:** Splitting raw addresses into tag, set index and offset.
//! 2. **Error handling:** Configuration and trace errors plus the umbrella [`SimError`].

/// Address decomposition into tag, set index and block offset.
pub mod addr;

/// Error types for configuration and trace handling.
pub mod error;

pub use addr::{AddressDecoder, DecodedAddress, decode};
pub use error::{ConfigError, Result, SimError, TraceError};
