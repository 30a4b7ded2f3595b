//! Arithmetic logic unit.
//!
//! All arithmetic is two's-complement with silent wraparound. Shift amounts
//! use only the low five bits of the second operand, matching the hardware
//! shifter width.

use crate::core::pipeline::signals::AluOp;

/// Mask selecting the low five bits of a shift amount.
const SHIFT_MASK: u32 = 0x1F;

/// The arithmetic logic unit.
///
/// Stateless; every operation is a pure function of the selector and the
/// two operands.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Applies `op` to the operands and returns the 32-bit result.
    ///
    /// Comparison operations (`Slt`, `Sltu`) produce 0 or 1.
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Xor => a ^ b,
            AluOp::Or => a | b,
            AluOp::And => a & b,
            AluOp::Sll => a << (b & SHIFT_MASK),
            AluOp::Srl => a >> (b & SHIFT_MASK),
            AluOp::Sra => ((a as i32) >> (b & SHIFT_MASK)) as u32,
            AluOp::Slt => u32::from((a as i32) < (b as i32)),
            AluOp::Sltu => u32::from(a < b),
        }
    }
}
