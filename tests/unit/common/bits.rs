//! Bit-field helper tests.

use proptest::prelude::*;
use rvscalar::common::bits::{concat, extract_range, sign_bit, sign_extend};

#[test]
fn extract_single_bit() {
    assert_eq!(extract_range(0x8000_0000, 31, 31), 1);
    assert_eq!(extract_range(0x8000_0000, 30, 30), 0);
    assert_eq!(extract_range(0x0000_0001, 0, 0), 1);
}

#[test]
fn extract_mid_range_reindexes_to_bit_zero() {
    // bits 14:12 of 0x0000_7000 are 0b111
    assert_eq!(extract_range(0x0000_7000, 14, 12), 0b111);
    assert_eq!(extract_range(0x0000_5000, 14, 12), 0b101);
}

#[test]
fn extract_full_word() {
    assert_eq!(extract_range(0xDEAD_BEEF, 31, 0), 0xDEAD_BEEF);
}

#[test]
#[should_panic]
fn extract_inverted_range_panics() {
    extract_range(0, 3, 7);
}

#[test]
fn concat_rebuilds_split_fields() {
    // 0xAB split as 4 + 4 bits, padded to a full word
    assert_eq!(concat(&[(0, 24), (0xA, 4), (0xB, 4)]), 0xAB);
}

#[test]
fn concat_is_msb_first() {
    assert_eq!(concat(&[(1, 1), (0, 31)]), 0x8000_0000);
}

#[test]
#[should_panic]
fn concat_short_widths_panic() {
    concat(&[(0, 16), (0, 8)]);
}

#[test]
fn sign_bit_is_bit_31() {
    assert_eq!(sign_bit(0x8000_0000), 1);
    assert_eq!(sign_bit(0x7FFF_FFFF), 0);
}

#[test]
fn sign_extend_broadcasts() {
    assert_eq!(sign_extend(1, 20), 0x000F_FFFF);
    assert_eq!(sign_extend(0, 20), 0);
    assert_eq!(sign_extend(1, 32), u32::MAX);
}

proptest! {
    /// Extracting a range then re-concatenating around it reproduces the word.
    #[test]
    fn extract_concat_roundtrip(word: u32) {
        let high = extract_range(word, 31, 12);
        let low = extract_range(word, 11, 0);
        prop_assert_eq!(concat(&[(high, 20), (low, 12)]), word);
    }

    /// Every extracted range fits in its width.
    #[test]
    fn extract_fits_width(word: u32, low in 0u32..32, span in 0u32..32) {
        let high = (low + span).min(31);
        let width = high - low + 1;
        let value = extract_range(word, high, low);
        if width < 32 {
            prop_assert!(value < (1 << width));
        }
    }
}
