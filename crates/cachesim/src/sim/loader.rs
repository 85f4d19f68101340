//! Address trace loading.
//!
//! A trace file is a flat sequence of 32-bit big-endian words, one address per word,
//! with no header. Addresses are widened to `u64` for the simulator.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::TraceError;

/// Size of one address record in bytes.
pub const RECORD_BYTES: usize = 4;

/// Decodes an in-memory trace.
///
/// # Errors
///
/// Returns [`TraceError::Truncated`] if `bytes` does not hold a whole number of records.
pub fn parse_trace(bytes: &[u8]) -> Result<Vec<u64>, TraceError> {
    let records = bytes.chunks_exact(RECORD_BYTES);
    let trailing = records.remainder().len();
    if trailing != 0 {
        return Err(TraceError::Truncated {
            len: bytes.len(),
            record: RECORD_BYTES,
            trailing,
        });
    }
    Ok(records
        .map(|r| u64::from(u32::from_be_bytes([r[0], r[1], r[2], r[3]])))
        .collect())
}

/// Encodes addresses in the trace file format.
pub fn encode_trace(addresses: &[u32]) -> Vec<u8> {
    addresses.iter().flat_map(|a| a.to_be_bytes()).collect()
}

/// Reads and decodes a trace file.
///
/// # Arguments
///
/// * `path` - Path to the binary trace.
///
/// # Errors
///
/// Returns [`TraceError::Io`] if the file cannot be read, or [`TraceError::Truncated`]
/// if its length is not a multiple of [`RECORD_BYTES`].
pub fn load_trace(path: impl AsRef<Path>) -> Result<Vec<u64>, TraceError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let trace = parse_trace(&bytes)?;
    debug!(path = %path.display(), addresses = trace.len(), "trace loaded");
    Ok(trace)
}
