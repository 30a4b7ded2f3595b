//! Instruction memory.
//!
//! Holds the loaded program as a dense array of 32-bit words, indexed by
//! the program counter's slot number. Fetches past the end of the image
//! return `None`; the fetch stage turns those into pipeline bubbles so the
//! tail of the program drains cleanly.

use crate::common::Pc;

/// The read-only instruction memory.
#[derive(Clone, Debug, Default)]
pub struct InstructionMemory {
    words: Vec<u32>,
}

impl InstructionMemory {
    /// Creates an instruction memory holding `words`.
    pub fn new(words: Vec<u32>) -> Self {
        Self { words }
    }

    /// Appends an instruction word to the end of the image.
    pub fn push(&mut self, word: u32) {
        self.words.push(word);
    }

    /// Fetches the instruction word at `pc`, or `None` past the image end.
    pub fn fetch(&self, pc: Pc) -> Option<u32> {
        self.words.get(pc.logical() as usize).copied()
    }

    /// Whether `pc` points past the last instruction of the image.
    pub fn at_end(&self, pc: Pc) -> bool {
        pc.logical() as usize >= self.words.len()
    }

    /// The number of instruction slots in the image.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the image is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
