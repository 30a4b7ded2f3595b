//! The simulated core.
//!
//! [`Machine`] gathers all architectural and microarchitectural state in
//! one place: program counter, register file, memories, the four
//! inter-stage latches, and the control redirect flag. Stages are
//! stateless and operate on a `&mut Machine`.

use crate::common::Pc;
use crate::core::arch::Gpr;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb, PipelineLatch};
use crate::core::units::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// Architectural register state.
pub mod arch;

/// The control unit.
pub mod control;

/// Pipeline stages, latches, and signals.
pub mod pipeline;

/// Combinational and storage units.
pub mod units;

/// Complete state of the simulated core.
#[derive(Clone, Debug, Default)]
pub struct Machine {
    /// Program counter, in instruction slots.
    pub pc: Pc,
    /// General-purpose register file.
    pub regs: Gpr,
    /// Instruction memory.
    pub imem: InstructionMemory,
    /// Data memory.
    pub dmem: DataMemory,
    /// Fetch/decode latch.
    pub if_id: IfId,
    /// Decode/execute latch.
    pub id_ex: IdEx,
    /// Execute/memory latch.
    pub ex_mem: ExMem,
    /// Memory/writeback latch.
    pub mem_wb: MemWb,
    /// A taken branch or jump redirected the program counter this cycle.
    pub redirect: bool,
    /// Execution counters.
    pub stats: SimStats,
}

impl Machine {
    /// Creates a machine with the given program image and zeroed state.
    pub fn new(imem: InstructionMemory) -> Self {
        Self {
            imem,
            ..Self::default()
        }
    }

    /// Whether the pipeline is empty and no further fetch is possible.
    pub fn drained(&self) -> bool {
        self.imem.at_end(self.pc)
            && self.if_id.is_bubble()
            && self.id_ex.is_bubble()
            && self.ex_mem.is_bubble()
            && self.mem_wb.is_bubble()
    }
}
