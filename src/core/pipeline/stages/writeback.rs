//! Writeback stage.
//!
//! Runs first each cycle, so a retiring halt stops the machine before any
//! younger in-flight instruction can touch architectural state. The
//! writeback value is the loaded word for loads, the return address for
//! jumps, and the ALU result otherwise.

use tracing::trace;

use crate::common::SimError;
use crate::core::Machine;
use crate::core::pipeline::latches::PipelineLatch;
use crate::core::pipeline::traits::{PipelineStage, StageOutcome};

/// The writeback stage.
#[derive(Debug)]
pub struct Writeback;

impl PipelineStage for Writeback {
    fn run(machine: &mut Machine) -> Result<StageOutcome, SimError> {
        let mem_wb = machine.mem_wb;
        if mem_wb.is_bubble() {
            return Ok(StageOutcome::Advanced);
        }

        if mem_wb.we.halt {
            trace!("WB  pc={:#010x} halt", mem_wb.pc.byte());
            machine.stats.instructions_retired += 1;
            machine.stats.inst_system += 1;
            return Ok(StageOutcome::Halted);
        }

        let ctrl = mem_wb.ctrl;
        let value = if ctrl.mem_read {
            mem_wb.load_data
        } else if ctrl.jump {
            mem_wb.pc.byte().wrapping_add(4)
        } else {
            mem_wb.alu
        };

        if mem_wb.we.reg_we {
            trace!(
                "WB  pc={:#010x} x{} <- {:#010x}",
                mem_wb.pc.byte(),
                mem_wb.rd,
                value
            );
            machine.regs.write(mem_wb.rd, value);
        }

        machine.stats.instructions_retired += 1;
        if ctrl.mem_read {
            machine.stats.inst_load += 1;
        } else if ctrl.mem_write {
            machine.stats.inst_store += 1;
        } else if ctrl.branch || ctrl.jump {
            machine.stats.inst_branch += 1;
        } else {
            machine.stats.inst_alu += 1;
        }

        Ok(StageOutcome::Advanced)
    }
}
