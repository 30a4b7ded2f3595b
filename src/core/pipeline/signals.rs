//! Pipeline control signals and operation selectors.
//!
//! This module defines the control signals derived once per instruction by
//! the control unit and consumed by the later pipeline stages: ALU and
//! comparator operation selection, memory access width, write-enable
//! requests, operand source selection, and control-flow indicators.

/// ALU operation selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition (two's-complement wraparound).
    #[default]
    Add,
    /// Integer subtraction (two's-complement wraparound).
    Sub,
    /// Bitwise XOR.
    Xor,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic (sign-preserving).
    Sra,
    /// Set less than (signed), producing 0 or 1.
    Slt,
    /// Set less than (unsigned), producing 0 or 1.
    Sltu,
}

/// Comparator relation selector, used for branch resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CmpOp {
    /// Equal.
    #[default]
    Eq,
    /// Not equal.
    Ne,
    /// Less than (signed).
    Lt,
    /// Greater than or equal (signed).
    Ge,
    /// Less than (unsigned).
    Ltu,
    /// Greater than or equal (unsigned).
    Geu,
}

/// Memory access width for load and store operations.
///
/// The signed/unsigned distinction selects sign- versus zero-extension on
/// sub-word loads; it does not affect stores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// No memory operation.
    #[default]
    Nop,
    /// 8-bit access, sign-extended on load.
    Byte,
    /// 8-bit access, zero-extended on load.
    ByteU,
    /// 16-bit access, sign-extended on load.
    Half,
    /// 16-bit access, zero-extended on load.
    HalfU,
    /// 32-bit access.
    Word,
}

/// Source for the first ALU operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Use the rs1 register value.
    #[default]
    Reg1,
    /// Use the program counter byte address (AUIPC, jumps).
    Pc,
    /// Use zero (LUI).
    Zero,
}

/// Source for the second ALU operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use the reconstructed immediate value.
    #[default]
    Imm,
    /// Use the rs2 register value.
    Reg2,
}

/// Control signals for pipeline stage execution.
///
/// Derived once per instruction from its opcode and format; immutable for
/// the instruction's lifetime in the pipeline. Write-enable fields here are
/// *requests*: the execute stage gates them with the slot's validity flag
/// before they can cause any observable effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Request a write to the destination register.
    pub reg_write: bool,
    /// The instruction reads data memory (load).
    pub mem_read: bool,
    /// Request a data memory write (store).
    pub mem_write: bool,
    /// The instruction is a conditional branch.
    pub branch: bool,
    /// The instruction is an unconditional jump (JAL/JALR).
    pub jump: bool,
    /// The jump target is register-relative (JALR) rather than PC-relative.
    pub jump_reg: bool,
    /// Request a halt (EBREAK).
    pub ebreak: bool,
    /// Width of the memory access for loads and stores.
    pub width: MemWidth,
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Comparator relation for branch resolution.
    pub cmp: CmpOp,
    /// Source selection for ALU operand A.
    pub a_src: OpASrc,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
}
