//! Encoding constants for the RV32I base ISA.
//!
//! The low 7 bits of every instruction word select the opcode group, which
//! determines the encoding format; `funct3` and `funct7` select the concrete
//! operation within a group.

/// Load upper immediate (U-format).
pub const OP_LUI: u32 = 0x37;
/// Add upper immediate to PC (U-format).
pub const OP_AUIPC: u32 = 0x17;
/// Unconditional jump and link (J-format).
pub const OP_JAL: u32 = 0x6F;
/// Indirect jump and link, register plus offset (I-format).
pub const OP_JALR: u32 = 0x67;
/// Conditional branches (B-format).
pub const OP_BRANCH: u32 = 0x63;
/// Memory loads (I-format).
pub const OP_LOAD: u32 = 0x03;
/// Memory stores (S-format).
pub const OP_STORE: u32 = 0x23;
/// Register-immediate arithmetic (I-format).
pub const OP_IMM: u32 = 0x13;
/// Register-register arithmetic (R-format).
pub const OP_REG: u32 = 0x33;
/// System instructions (I-format); only EBREAK is supported.
pub const OP_SYSTEM: u32 = 0x73;

/// Full encoding of the EBREAK instruction.
pub const EBREAK: u32 = 0x0010_0073;

/// The canonical NOP (`ADDI x0, x0, 0`).
pub const NOP: u32 = 0x0000_0013;

/// `funct3` codes, grouped by opcode family.
pub mod funct3 {
    /// ADD/ADDI (and SUB under [`super::funct7::SUB_SRA`]).
    pub const ADD_SUB: u32 = 0x0;
    /// Shift left logical.
    pub const SLL: u32 = 0x1;
    /// Set less than (signed).
    pub const SLT: u32 = 0x2;
    /// Set less than (unsigned).
    pub const SLTU: u32 = 0x3;
    /// Bitwise XOR.
    pub const XOR: u32 = 0x4;
    /// Shift right logical or arithmetic, per funct7.
    pub const SRL_SRA: u32 = 0x5;
    /// Bitwise OR.
    pub const OR: u32 = 0x6;
    /// Bitwise AND.
    pub const AND: u32 = 0x7;

    /// Branch if equal.
    pub const BEQ: u32 = 0x0;
    /// Branch if not equal.
    pub const BNE: u32 = 0x1;
    /// Branch if less than (signed).
    pub const BLT: u32 = 0x4;
    /// Branch if greater or equal (signed).
    pub const BGE: u32 = 0x5;
    /// Branch if less than (unsigned).
    pub const BLTU: u32 = 0x6;
    /// Branch if greater or equal (unsigned).
    pub const BGEU: u32 = 0x7;

    /// Load byte, sign-extended.
    pub const LB: u32 = 0x0;
    /// Load half-word, sign-extended.
    pub const LH: u32 = 0x1;
    /// Load word.
    pub const LW: u32 = 0x2;
    /// Load byte, zero-extended.
    pub const LBU: u32 = 0x4;
    /// Load half-word, zero-extended.
    pub const LHU: u32 = 0x5;

    /// Store byte.
    pub const SB: u32 = 0x0;
    /// Store half-word.
    pub const SH: u32 = 0x1;
    /// Store word.
    pub const SW: u32 = 0x2;
}

/// `funct7` codes.
pub mod funct7 {
    /// The default function code.
    pub const DEFAULT: u32 = 0x00;
    /// Alternate encoding selecting SUB or SRA.
    pub const SUB_SRA: u32 = 0x20;
}
