//! Cycle-level simulation driver.
//!
//! One call to [`Simulator::tick`] advances the machine by one clock
//! cycle. Stages run in reverse order (writeback first, fetch last) so
//! every stage sees its input latch as left by the previous cycle. A stall
//! from decode suppresses fetch for the cycle, holding the fetched word in
//! place and inserting a bubble downstream.

use tracing::{debug, error};

use crate::common::SimError;
use crate::config::Config;
use crate::core::Machine;
use crate::core::pipeline::stages::{Decode, Execute, Fetch, Memory, Writeback};
use crate::core::pipeline::{PipelineStage, StageOutcome};
use crate::core::units::InstructionMemory;
use crate::stats::SimStats;

/// How a simulation run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program ran off the end of the image and the pipeline drained.
    Drained,
    /// A halt instruction retired.
    Break,
    /// The configured cycle budget was exhausted.
    CycleLimit,
}

/// The top-level simulator: machine state plus the cycle loop.
#[derive(Clone, Debug)]
pub struct Simulator {
    machine: Machine,
    max_cycles: u64,
}

impl Simulator {
    /// Creates a simulator for the given program image.
    pub fn new(imem: InstructionMemory, config: &Config) -> Self {
        Self {
            machine: Machine::new(imem),
            max_cycles: config.max_cycles,
        }
    }

    /// Advances the machine by one clock cycle.
    ///
    /// Returns [`StageOutcome::Halted`] when a halt instruction retires
    /// this cycle; younger in-flight instructions are abandoned without
    /// effect.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SimError`] raised by any stage.
    pub fn tick(&mut self) -> Result<StageOutcome, SimError> {
        let machine = &mut self.machine;
        machine.stats.cycles += 1;

        if Writeback::run(machine)? == StageOutcome::Halted {
            return Ok(StageOutcome::Halted);
        }
        Memory::run(machine)?;
        Execute::run(machine)?;
        let decode = Decode::run(machine)?;

        if decode == StageOutcome::Stalled {
            machine.stats.stalls_data += 1;
        } else {
            Fetch::run(machine)?;
        }

        machine.redirect = false;
        Ok(StageOutcome::Advanced)
    }

    /// Runs the machine until it halts, drains, or exhausts the budget.
    ///
    /// A `max_cycles` of zero means no budget.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SimError`] raised by any stage.
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        loop {
            if self.machine.drained() {
                debug!(cycles = self.machine.stats.cycles, "pipeline drained");
                return Ok(RunOutcome::Drained);
            }
            if self.max_cycles != 0 && self.machine.stats.cycles >= self.max_cycles {
                debug!(max_cycles = self.max_cycles, "cycle budget exhausted");
                return Ok(RunOutcome::CycleLimit);
            }
            match self.tick() {
                Ok(StageOutcome::Halted) => {
                    debug!(cycles = self.machine.stats.cycles, "halt retired");
                    return Ok(RunOutcome::Break);
                }
                Ok(_) => {}
                Err(err) => {
                    error!(cycle = self.machine.stats.cycles, %err, "simulation fault");
                    return Err(err);
                }
            }
        }
    }

    /// The complete machine state.
    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// A snapshot of the general-purpose registers.
    pub fn registers(&self) -> [u32; crate::core::arch::gpr::NUM_REGS] {
        self.machine.regs.snapshot()
    }

    /// Every touched data memory location, sorted by address.
    pub fn memory(&self) -> Vec<(u32, u32)> {
        self.machine.dmem.touched()
    }

    /// The execution counters.
    pub fn stats(&self) -> &SimStats {
        &self.machine.stats
    }
}
