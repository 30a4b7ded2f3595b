//! Branch comparator.

use crate::core::pipeline::signals::CmpOp;

/// The branch condition comparator.
///
/// Stateless; evaluates one of the six branch relations over two register
/// values.
#[derive(Clone, Copy, Debug, Default)]
pub struct Comparator;

impl Comparator {
    /// Evaluates the relation `op` over the operands.
    pub fn compare(op: CmpOp, a: u32, b: u32) -> bool {
        match op {
            CmpOp::Eq => a == b,
            CmpOp::Ne => a != b,
            CmpOp::Lt => (a as i32) < (b as i32),
            CmpOp::Ge => (a as i32) >= (b as i32),
            CmpOp::Ltu => a < b,
            CmpOp::Geu => a >= b,
        }
    }
}
