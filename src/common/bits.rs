//! Bit-field utilities over 32-bit words.
//!
//! Instruction immediates in the base ISA are scattered across
//! non-contiguous bit ranges of the encoding word. This module provides the
//! primitives used to reassemble them:
//! 1. **Extraction:** Pulling a contiguous bit range out of a word.
//! 2. **Concatenation:** Packing several fixed-width fields into one word.
//! 3. **Sign handling:** Isolating and broadcasting a sign bit.
//!
//! Range and width violations are programming errors in control-signal or
//! immediate derivation, never properties of user programs; they abort.

/// Total width of a machine word in bits.
pub const WORD_BITS: u32 = 32;

/// A low-order bit mask of the given width.
///
/// Valid for widths up to [`WORD_BITS`]; a width of 32 yields all ones.
fn mask(width: u32) -> u32 {
    debug_assert!(width <= WORD_BITS);
    (((1u64) << width) - 1) as u32
}

/// Extracts the contiguous bits `[low, high]` of `word`.
///
/// The result is reindexed so bit `low` of the input becomes bit 0 of the
/// output.
///
/// # Arguments
///
/// * `word` - The word to extract from.
/// * `high` - The most-significant bit of the range (inclusive).
/// * `low`  - The least-significant bit of the range (inclusive).
///
/// # Panics
///
/// Panics unless `low <= high < 32`.
pub fn extract_range(word: u32, high: u32, low: u32) -> u32 {
    assert!(
        low <= high && high < WORD_BITS,
        "invalid bit range [{low}, {high}]"
    );
    (word >> low) & mask(high - low + 1)
}

/// Concatenates fixed-width fields, most-significant part first, into one word.
///
/// Each part is a `(value, width)` pair; the widths must sum to exactly 32.
///
/// # Panics
///
/// Panics if the widths do not sum to [`WORD_BITS`].
pub fn concat(parts: &[(u32, u32)]) -> u32 {
    let total: u32 = parts.iter().map(|&(_, w)| w).sum();
    assert!(total == WORD_BITS, "field widths sum to {total}, expected 32");

    let mut word = 0u32;
    for &(value, width) in parts {
        debug_assert!(value <= mask(width), "field value {value:#x} exceeds {width} bits");
        word = (word << width) | (value & mask(width));
    }
    word
}

/// Returns the sign bit (bit 31) of `word` as a single bit.
pub fn sign_bit(word: u32) -> u32 {
    word >> (WORD_BITS - 1)
}

/// Broadcasts a sign bit across `width` low-order bits.
///
/// Returns an all-zero or all-one field of the given width depending on
/// whether `bit` is 0 or 1, used to pad the high end of an immediate.
///
/// # Panics
///
/// Panics if `bit` is not a single bit or `width` exceeds 32.
pub fn sign_extend(bit: u32, width: u32) -> u32 {
    assert!(bit <= 1, "sign bit must be 0 or 1, got {bit}");
    assert!(width <= WORD_BITS, "invalid sign-extension width {width}");
    if bit == 1 { mask(width) } else { 0 }
}
