//! Address decomposition.
//!
//! Splits a raw byte address into the three fields a set-associative cache indexes by:
//!
//! ```text
//!  63                          offset_bits + index_bits     offset_bits            0
//! +-------------------------------+----------------------------+--------------------+
//! |              tag              |         set index          |    block offset    |
//! +-------------------------------+----------------------------+--------------------+
//! ```
//!
//! Both the block size and the number of sets must be powers of two so that each
//! field is a contiguous bit range.

use super::error::ConfigError;

/// An address split into tag, set index and block offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecodedAddress {
    /// Upper bits identifying the block within its set.
    pub tag: u64,
    /// Set the block maps to, in `[0, num_sets)`.
    pub set_index: usize,
    /// Byte offset within the block. Not used by the hit logic.
    pub offset: u64,
}

/// Pre-validated decoder holding the field widths for one cache geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressDecoder {
    offset_bits: u32,
    index_bits: u32,
}

/// Mask with the low `bits` bits set. `bits` is always below 64 here.
#[inline(always)]
const fn low_mask(bits: u32) -> u64 {
    (1u64 << bits) - 1
}

impl AddressDecoder {
    /// Creates a decoder for the given geometry.
    ///
    /// # Arguments
    ///
    /// * `block_size` - Block (line) size in bytes.
    /// * `num_sets` - Number of sets in the cache.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BlockSizeNotPowerOfTwo`] or [`ConfigError::SetsNotPowerOfTwo`]
    /// if either value is zero or not a power of two.
    pub const fn new(block_size: u64, num_sets: u64) -> Result<Self, ConfigError> {
        if !block_size.is_power_of_two() {
            return Err(ConfigError::BlockSizeNotPowerOfTwo(block_size));
        }
        if !num_sets.is_power_of_two() {
            return Err(ConfigError::SetsNotPowerOfTwo(num_sets));
        }
        Ok(Self {
            offset_bits: block_size.trailing_zeros(),
            index_bits: num_sets.trailing_zeros(),
        })
    }

    /// Number of block-offset bits (`log2(block_size)`).
    #[inline(always)]
    pub const fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Number of set-index bits (`log2(num_sets)`).
    #[inline(always)]
    pub const fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Block size in bytes.
    pub const fn block_size(&self) -> u64 {
        1 << self.offset_bits
    }

    /// Number of sets.
    pub const fn num_sets(&self) -> u64 {
        1 << self.index_bits
    }

    /// Splits `address` into tag, set index and offset.
    ///
    /// Equivalent to `offset = addr % block_size`, `set = (addr / block_size) % num_sets`,
    /// `tag = addr / (block_size * num_sets)`.
    #[inline(always)]
    pub const fn decode(&self, address: u64) -> DecodedAddress {
        let offset = address & low_mask(self.offset_bits);
        let set_index = (address >> self.offset_bits) & low_mask(self.index_bits);
        // Geometry can consume all 64 bits, leaving an empty tag.
        let tag = match address.checked_shr(self.offset_bits + self.index_bits) {
            Some(tag) => tag,
            None => 0,
        };
        DecodedAddress {
            tag,
            set_index: set_index as usize,
            offset,
        }
    }
}

/// Decodes a single address against the given geometry.
///
/// Convenience wrapper around [`AddressDecoder::new`] followed by
/// [`AddressDecoder::decode`]; prefer building the decoder once for a whole trace.
///
/// # Errors
///
/// Returns a [`ConfigError`] if `block_size` or `num_sets` is not a power of two.
pub fn decode(address: u64, block_size: u64, num_sets: u64) -> Result<DecodedAddress, ConfigError> {
    let decoder = AddressDecoder::new(block_size, num_sets)?;
    Ok(decoder.decode(address))
}
