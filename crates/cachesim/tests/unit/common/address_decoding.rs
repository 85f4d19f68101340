//! # Address Decoding Tests
//!
//! Verifies the tag / set index / offset split for a range of geometries and the
//! power-of-two requirement on block size and set count.

use cachesim_core::common::{AddressDecoder, ConfigError, DecodedAddress, decode};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(0x0000_0000, 4, 256, 0, 0, 0)]
#[case(0x0000_0007, 4, 256, 0, 1, 3)]
#[case(0x0000_0400, 4, 256, 1, 0, 0)]
#[case(0xDEAD_BEEF, 16, 64, 0xDEAD_BEEF >> 10, (0xDEAD_BEEF >> 4) & 63, 0xF)]
#[case(0x1234_5678, 1, 1, 0x1234_5678, 0, 0)]
#[case(0xFFFF_FFFF, 64, 1024, 0xFFFF_FFFF >> 16, 1023, 63)]
fn test_decode_fields(
    #[case] address: u64,
    #[case] block_size: u64,
    #[case] num_sets: u64,
    #[case] tag: u64,
    #[case] set_index: usize,
    #[case] offset: u64,
) {
    assert_eq!(
        decode(address, block_size, num_sets).unwrap(),
        DecodedAddress {
            tag,
            set_index,
            offset
        }
    );
}

#[test]
fn test_decode_matches_division_formula() {
    let decoder = AddressDecoder::new(32, 8).unwrap();
    for address in (0..10_000u64).map(|i| i * 37 + 11) {
        let d = decoder.decode(address);
        assert_eq!(d.offset, address % 32);
        assert_eq!(d.set_index as u64, (address / 32) % 8);
        assert_eq!(d.tag, address / (32 * 8));
    }
}

#[test]
fn test_decoder_bit_widths() {
    let decoder = AddressDecoder::new(64, 128).unwrap();
    assert_eq!(decoder.offset_bits(), 6);
    assert_eq!(decoder.index_bits(), 7);
    assert_eq!(decoder.block_size(), 64);
    assert_eq!(decoder.num_sets(), 128);
}

#[test]
fn test_full_width_geometry_has_empty_tag() {
    let decoder = AddressDecoder::new(1 << 32, 1 << 32).unwrap();
    let d = decoder.decode(u64::MAX);
    assert_eq!(d.tag, 0);
    assert_eq!(d.offset, 0xFFFF_FFFF);
    assert_eq!(d.set_index as u64, 0xFFFF_FFFF);
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(12)]
#[case(100)]
fn test_block_size_must_be_power_of_two(#[case] block_size: u64) {
    assert_eq!(
        AddressDecoder::new(block_size, 4),
        Err(ConfigError::BlockSizeNotPowerOfTwo(block_size))
    );
}

#[rstest]
#[case(0)]
#[case(6)]
#[case(255)]
fn test_num_sets_must_be_power_of_two(#[case] num_sets: u64) {
    assert_eq!(
        decode(0x40, 4, num_sets),
        Err(ConfigError::SetsNotPowerOfTwo(num_sets))
    );
}
