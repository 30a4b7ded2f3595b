//! Instruction word classification and field extraction.
//!
//! A raw 32-bit word is classified into one of the six base-ISA encoding
//! formats from its low 7 opcode bits; every field accessor is then a pure
//! projection of a fixed bit range. Accessors must not be called for formats
//! that lack the field (there is no second source register on U- or
//! J-format instructions, for example); this is debug-asserted.

use crate::common::SimError;
use crate::common::bits::extract_range;
use crate::isa::opcodes;

/// The six instruction-encoding formats of the base ISA.
///
/// The format determines which bit positions hold which operand fields and
/// which immediate-reconstruction rule applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Register-register arithmetic.
    R,
    /// Register-immediate arithmetic, loads, JALR, system.
    #[default]
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// Upper immediates (LUI, AUIPC).
    U,
    /// Unconditional jumps (JAL).
    J,
}

/// An immutable instruction word together with its derived format.
///
/// Created once at the fetch/decode boundary and read-only for the rest of
/// the instruction's lifetime in the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    raw: u32,
    format: Format,
}

impl Default for Instruction {
    /// The canonical NOP, used for pipeline bubbles.
    fn default() -> Self {
        Self {
            raw: opcodes::NOP,
            format: Format::I,
        }
    }
}

impl Instruction {
    /// Classifies a raw instruction word by its opcode group.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::IllegalInstruction`] for opcode groups outside
    /// the supported base ISA.
    pub fn decode(raw: u32) -> Result<Self, SimError> {
        let format = match extract_range(raw, 6, 0) {
            opcodes::OP_REG => Format::R,
            opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR | opcodes::OP_SYSTEM => Format::I,
            opcodes::OP_STORE => Format::S,
            opcodes::OP_BRANCH => Format::B,
            opcodes::OP_LUI | opcodes::OP_AUIPC => Format::U,
            opcodes::OP_JAL => Format::J,
            _ => return Err(SimError::IllegalInstruction(raw)),
        };
        Ok(Self { raw, format })
    }

    /// The raw 32-bit encoding.
    pub fn raw(&self) -> u32 {
        self.raw
    }

    /// The derived encoding format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// The opcode group (bits 6:0).
    pub fn opcode(&self) -> u32 {
        extract_range(self.raw, 6, 0)
    }

    /// Destination register index (bits 11:7).
    ///
    /// Valid for R, I, U, and J formats.
    pub fn rd(&self) -> usize {
        debug_assert!(
            matches!(self.format, Format::R | Format::I | Format::U | Format::J),
            "{:?}-format has no rd field",
            self.format
        );
        extract_range(self.raw, 11, 7) as usize
    }

    /// First source register index (bits 19:15).
    ///
    /// Valid for R, I, S, and B formats.
    pub fn rs1(&self) -> usize {
        debug_assert!(
            matches!(self.format, Format::R | Format::I | Format::S | Format::B),
            "{:?}-format has no rs1 field",
            self.format
        );
        extract_range(self.raw, 19, 15) as usize
    }

    /// Second source register index (bits 24:20).
    ///
    /// Valid for R, S, and B formats.
    pub fn rs2(&self) -> usize {
        debug_assert!(
            matches!(self.format, Format::R | Format::S | Format::B),
            "{:?}-format has no rs2 field",
            self.format
        );
        extract_range(self.raw, 24, 20) as usize
    }

    /// The `funct3` field (bits 14:12).
    ///
    /// Valid for R, I, S, and B formats.
    pub fn funct3(&self) -> u32 {
        debug_assert!(
            matches!(self.format, Format::R | Format::I | Format::S | Format::B),
            "{:?}-format has no funct3 field",
            self.format
        );
        extract_range(self.raw, 14, 12)
    }

    /// The `funct7` field (bits 31:25).
    ///
    /// Valid for R-format instructions and the shift-immediate encodings
    /// within the I-format.
    pub fn funct7(&self) -> u32 {
        debug_assert!(
            matches!(self.format, Format::R | Format::I),
            "{:?}-format has no funct7 field",
            self.format
        );
        extract_range(self.raw, 31, 25)
    }
}
