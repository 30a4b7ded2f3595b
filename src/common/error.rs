//! Fatal error definitions.
//!
//! This module defines the error taxonomy for conditions that abort a
//! simulation run. It covers:
//! 1. **Encoding errors:** Instruction words the control unit cannot classify.
//! 2. **Control-flow errors:** Resolved targets that are not word-aligned.
//! 3. **Image errors:** Malformed program images handed to the loader.
//!
//! Expected control-flow conditions (data-hazard stalls, a requested halt,
//! running off the end of the instruction stream) are *not* errors; they are
//! stage outcomes handled by the driver. Invariant violations that can only
//! arise from simulator bugs (bad bit ranges, out-of-range register indices)
//! are asserted fatally at the point of misuse instead.

use thiserror::Error;

/// An unrecoverable simulation error.
///
/// Any of these aborts the run before the offending instruction performs an
/// observable register or memory write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The instruction word does not decode to any supported encoding.
    #[error("illegal instruction {0:#010x}")]
    IllegalInstruction(u32),

    /// A resolved branch or jump target is not word-aligned.
    #[error("misaligned control-flow target {target:#x} (resolved at pc {pc:#x})")]
    MisalignedTarget {
        /// Byte address of the instruction that produced the target.
        pc: u32,
        /// The offending target byte address.
        target: u32,
    },

    /// A program image whose length is not a whole number of words.
    #[error("truncated program image: {0} bytes is not a multiple of 4")]
    TruncatedImage(usize),
}
