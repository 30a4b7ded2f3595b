//! Sparse data memory.
//!
//! Backing storage is a hash map from address to 32-bit word, so only
//! touched locations consume memory. Addresses index whole words directly;
//! there is no byte-offset arithmetic within a word. Reads from untouched
//! locations return zero.
//!
//! Sub-word stores replace the *entire* addressed word with the
//! zero-extended narrow value: each location holds exactly one value of
//! whatever width was last stored.

use std::collections::HashMap;

use crate::common::bits::{extract_range, sign_bit, sign_extend};
use crate::core::pipeline::signals::MemWidth;

/// The sparse data memory.
#[derive(Clone, Debug, Default)]
pub struct DataMemory {
    words: HashMap<u32, u32>,
}

impl DataMemory {
    /// Creates an empty data memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the raw word at `addr`, or zero if untouched.
    pub fn read_word(&self, addr: u32) -> u32 {
        self.words.get(&addr).copied().unwrap_or(0)
    }

    /// Loads a value of the given width from `addr`.
    ///
    /// Sub-word loads take the low bits of the stored word and sign- or
    /// zero-extend them according to the width selector.
    ///
    /// # Panics
    ///
    /// Panics if called with [`MemWidth::Nop`]; the memory stage only
    /// invokes the unit for real accesses.
    pub fn load(&self, width: MemWidth, addr: u32) -> u32 {
        let word = self.read_word(addr);
        match width {
            MemWidth::Word => word,
            MemWidth::Byte => {
                let low = extract_range(word, 7, 0);
                sign_extend(sign_bit(low << 24), 24) << 8 | low
            }
            MemWidth::ByteU => extract_range(word, 7, 0),
            MemWidth::Half => {
                let low = extract_range(word, 15, 0);
                sign_extend(sign_bit(low << 16), 16) << 16 | low
            }
            MemWidth::HalfU => extract_range(word, 15, 0),
            MemWidth::Nop => unreachable!("load invoked without a memory operation"),
        }
    }

    /// Stores a value of the given width at `addr`.
    ///
    /// Sub-word stores replace the whole word with the zero-extended low
    /// bits of `value`.
    ///
    /// # Panics
    ///
    /// Panics if called with [`MemWidth::Nop`].
    pub fn store(&mut self, width: MemWidth, addr: u32, value: u32) {
        let word = match width {
            MemWidth::Word => value,
            MemWidth::Byte | MemWidth::ByteU => extract_range(value, 7, 0),
            MemWidth::Half | MemWidth::HalfU => extract_range(value, 15, 0),
            MemWidth::Nop => unreachable!("store invoked without a memory operation"),
        };
        self.words.insert(addr, word);
    }

    /// Every touched location, sorted by address.
    pub fn touched(&self) -> Vec<(u32, u32)> {
        let mut entries: Vec<_> = self.words.iter().map(|(&a, &w)| (a, w)).collect();
        entries.sort_unstable_by_key(|&(a, _)| a);
        entries
    }
}
