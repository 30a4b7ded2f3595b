//! Memory access stage.

use tracing::trace;

use crate::common::SimError;
use crate::core::Machine;
use crate::core::pipeline::latches::{MemWb, PipelineLatch};
use crate::core::pipeline::traits::{PipelineStage, StageOutcome};

/// The memory stage.
///
/// Performs at most one data memory access per cycle: a store when the
/// gated write enable is set, a load when the instruction reads memory.
/// The ALU result from execute is the access address.
#[derive(Debug)]
pub struct Memory;

impl PipelineStage for Memory {
    fn run(machine: &mut Machine) -> Result<StageOutcome, SimError> {
        let ex_mem = machine.ex_mem;
        if ex_mem.is_bubble() {
            machine.mem_wb = MemWb::default();
            return Ok(StageOutcome::Advanced);
        }

        let addr = ex_mem.alu;
        if ex_mem.we.mem_we {
            trace!(
                "MEM pc={:#010x} store addr={:#010x} data={:#010x}",
                ex_mem.pc.byte(),
                addr,
                ex_mem.store_data
            );
            machine
                .dmem
                .store(ex_mem.ctrl.width, addr, ex_mem.store_data);
        }

        let load_data = if ex_mem.ctrl.mem_read {
            let value = machine.dmem.load(ex_mem.ctrl.width, addr);
            trace!(
                "MEM pc={:#010x} load addr={:#010x} data={:#010x}",
                ex_mem.pc.byte(),
                addr,
                value
            );
            value
        } else {
            0
        };

        machine.mem_wb = MemWb {
            pc: ex_mem.pc,
            rd: ex_mem.rd,
            alu: ex_mem.alu,
            load_data,
            we: ex_mem.we,
            ctrl: ex_mem.ctrl,
            valid: true,
        };
        Ok(StageOutcome::Advanced)
    }
}
