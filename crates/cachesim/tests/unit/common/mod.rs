//! Common component tests.

/// Tag / set index / offset decomposition.
pub mod address_decoding;
