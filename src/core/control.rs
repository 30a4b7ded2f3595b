//! Control unit.
//!
//! Derives the full set of control signals for an instruction word in one
//! place. Decode is the only stage that consults this unit; every later
//! stage acts purely on the signals carried in its input latch.

use crate::common::SimError;
use crate::core::pipeline::signals::{AluOp, CmpOp, ControlSignals, MemWidth, OpASrc, OpBSrc};
use crate::isa::Instruction;
use crate::isa::opcodes::{self, funct3, funct7};

/// The control unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlUnit;

impl ControlUnit {
    /// Classifies `raw` and derives its control signals.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::IllegalInstruction`] when the opcode group is
    /// unknown or a function code within a known group selects no
    /// operation.
    pub fn decode(raw: u32) -> Result<(Instruction, ControlSignals), SimError> {
        let instr = Instruction::decode(raw)?;
        let mut ctrl = ControlSignals::default();

        match instr.opcode() {
            opcodes::OP_LUI => {
                ctrl.reg_write = true;
                ctrl.a_src = OpASrc::Zero;
            }
            opcodes::OP_AUIPC => {
                ctrl.reg_write = true;
                ctrl.a_src = OpASrc::Pc;
            }
            opcodes::OP_JAL => {
                ctrl.reg_write = true;
                ctrl.jump = true;
                ctrl.a_src = OpASrc::Pc;
            }
            opcodes::OP_JALR => {
                ctrl.reg_write = true;
                ctrl.jump = true;
                ctrl.jump_reg = true;
                ctrl.a_src = OpASrc::Pc;
            }
            opcodes::OP_BRANCH => {
                ctrl.branch = true;
                ctrl.b_src = OpBSrc::Reg2;
                ctrl.cmp = match instr.funct3() {
                    funct3::BEQ => CmpOp::Eq,
                    funct3::BNE => CmpOp::Ne,
                    funct3::BLT => CmpOp::Lt,
                    funct3::BGE => CmpOp::Ge,
                    funct3::BLTU => CmpOp::Ltu,
                    funct3::BGEU => CmpOp::Geu,
                    _ => return Err(SimError::IllegalInstruction(raw)),
                };
            }
            opcodes::OP_LOAD => {
                ctrl.reg_write = true;
                ctrl.mem_read = true;
                ctrl.width = match instr.funct3() {
                    funct3::LB => MemWidth::Byte,
                    funct3::LH => MemWidth::Half,
                    funct3::LW => MemWidth::Word,
                    funct3::LBU => MemWidth::ByteU,
                    funct3::LHU => MemWidth::HalfU,
                    _ => return Err(SimError::IllegalInstruction(raw)),
                };
            }
            opcodes::OP_STORE => {
                ctrl.mem_write = true;
                ctrl.width = match instr.funct3() {
                    funct3::SB => MemWidth::Byte,
                    funct3::SH => MemWidth::Half,
                    funct3::SW => MemWidth::Word,
                    _ => return Err(SimError::IllegalInstruction(raw)),
                };
            }
            opcodes::OP_IMM => {
                ctrl.reg_write = true;
                ctrl.alu = Self::alu_op(&instr, false)?;
            }
            opcodes::OP_REG => {
                ctrl.reg_write = true;
                ctrl.b_src = OpBSrc::Reg2;
                ctrl.alu = Self::alu_op(&instr, true)?;
            }
            opcodes::OP_SYSTEM => {
                if raw != opcodes::EBREAK {
                    return Err(SimError::IllegalInstruction(raw));
                }
                ctrl.ebreak = true;
            }
            _ => return Err(SimError::IllegalInstruction(raw)),
        }

        Ok((instr, ctrl))
    }

    /// Selects the ALU operation for the arithmetic opcode groups.
    ///
    /// For the register-register group every operation consults `funct7`;
    /// in the immediate group only the right-shift encodings do.
    fn alu_op(instr: &Instruction, reg_reg: bool) -> Result<AluOp, SimError> {
        let alt = instr.funct7() == funct7::SUB_SRA;
        let op = match instr.funct3() {
            funct3::ADD_SUB if reg_reg && alt => AluOp::Sub,
            funct3::ADD_SUB => AluOp::Add,
            funct3::SLL => AluOp::Sll,
            funct3::SLT => AluOp::Slt,
            funct3::SLTU => AluOp::Sltu,
            funct3::XOR => AluOp::Xor,
            funct3::SRL_SRA if alt => AluOp::Sra,
            funct3::SRL_SRA => AluOp::Srl,
            funct3::OR => AluOp::Or,
            funct3::AND => AluOp::And,
            _ => return Err(SimError::IllegalInstruction(instr.raw())),
        };
        if reg_reg && alt && !matches!(op, AluOp::Sub | AluOp::Sra) {
            return Err(SimError::IllegalInstruction(instr.raw()));
        }
        Ok(op)
    }
}
