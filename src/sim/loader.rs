//! Program image loading.

use crate::common::SimError;
use crate::core::units::InstructionMemory;

/// Builds an instruction image directly from instruction words.
pub fn from_words(words: Vec<u32>) -> InstructionMemory {
    InstructionMemory::new(words)
}

/// Builds an instruction image from a little-endian byte stream.
///
/// # Errors
///
/// Returns [`SimError::TruncatedImage`] when the stream length is not a
/// whole number of 32-bit words.
pub fn from_le_bytes(bytes: &[u8]) -> Result<InstructionMemory, SimError> {
    if bytes.len() % 4 != 0 {
        return Err(SimError::TruncatedImage(bytes.len()));
    }
    let mut imem = InstructionMemory::default();
    for chunk in bytes.chunks_exact(4) {
        imem.push(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    Ok(imem)
}
