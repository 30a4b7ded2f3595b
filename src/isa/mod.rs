//! Instruction-set definitions for the RV32I base ISA subset.
//!
//! This module covers the static, per-instruction side of the simulator:
//! 1. **Opcodes:** Encoding constants for opcode groups and function codes.
//! 2. **Instructions:** Format classification and typed field accessors.
//! 3. **Immediates:** Reconstruction of the scattered immediate encodings.

/// Immediate operand reconstruction per encoding format.
pub mod imm;

/// Instruction word classification and field extraction.
pub mod instruction;

/// Opcode, funct3, and funct7 encoding constants.
pub mod opcodes;

pub use imm::{ImmKind, Immediate};
pub use instruction::{Format, Instruction};
