//! Execute stage.
//!
//! Performs the ALU operation, resolves branches and jumps, and raises the
//! control redirect for taken control flow. The redirect takes effect in
//! the same cycle: decode runs next and squashes the wrong-path fetch, and
//! fetch then reads from the new program counter.
//!
//! For the indirect jump (JALR) the latched immediate is the link operand,
//! so the ALU result is the return address; the encoded branch offset is
//! reconstructed here separately to form the target.

use tracing::trace;

use crate::common::{Pc, SimError};
use crate::core::Machine;
use crate::core::pipeline::latches::{ExMem, PipelineLatch};
use crate::core::pipeline::signals::{OpASrc, OpBSrc};
use crate::core::pipeline::traits::{PipelineStage, StageOutcome};
use crate::core::units::{Alu, Comparator, WriteEnables};
use crate::isa::Immediate;

/// The execute stage.
#[derive(Debug)]
pub struct Execute;

impl PipelineStage for Execute {
    fn run(machine: &mut Machine) -> Result<StageOutcome, SimError> {
        let id_ex = machine.id_ex;
        if id_ex.is_bubble() {
            machine.ex_mem = ExMem::default();
            return Ok(StageOutcome::Advanced);
        }

        let ctrl = id_ex.ctrl;
        let we = WriteEnables::gate(ctrl.reg_write, ctrl.mem_write, ctrl.ebreak, id_ex.valid);

        let a = match ctrl.a_src {
            OpASrc::Reg1 => id_ex.rv1,
            OpASrc::Pc => id_ex.pc.byte(),
            OpASrc::Zero => 0,
        };
        let b = match ctrl.b_src {
            OpBSrc::Imm => id_ex.imm.value() as u32,
            OpBSrc::Reg2 => id_ex.rv2,
        };
        let alu = Alu::execute(ctrl.alu, a, b);

        let taken_branch = ctrl.branch && Comparator::compare(ctrl.cmp, id_ex.rv1, id_ex.rv2);
        if ctrl.jump || taken_branch {
            let target = if ctrl.jump_reg {
                let offset = Immediate::decode(&id_ex.instr, false).value();
                id_ex.rv1.wrapping_add_signed(offset) & !1
            } else {
                id_ex.pc.byte().wrapping_add_signed(id_ex.imm.value())
            };
            if target % 4 != 0 {
                return Err(SimError::MisalignedTarget {
                    pc: id_ex.pc.byte(),
                    target,
                });
            }
            trace!("EX  pc={:#010x} redirect -> {:#010x}", id_ex.pc.byte(), target);
            machine.pc = Pc::from_byte(target);
            machine.redirect = true;
            machine.stats.flushes_control += 1;
        }

        trace!(
            "EX  pc={:#010x} a={:#010x} b={:#010x} alu={:#010x}",
            id_ex.pc.byte(),
            a,
            b,
            alu
        );

        machine.ex_mem = ExMem {
            pc: id_ex.pc,
            rd: id_ex.rd,
            alu,
            store_data: id_ex.rv2,
            we,
            ctrl,
            valid: true,
        };
        Ok(StageOutcome::Advanced)
    }
}
