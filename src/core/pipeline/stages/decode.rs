//! Instruction decode stage.
//!
//! Runs after execute within a cycle, so a redirect raised by a taken
//! branch this cycle is visible here: the stale fetched word on the wrong
//! path is squashed into a bubble before it can decode. Hazard detection
//! compares this instruction's source registers against the destinations
//! still in flight in the two downstream latches; with writeback running
//! first each cycle, an instruction absent from both latches has already
//! updated the register file.

use tracing::trace;

use crate::common::SimError;
use crate::core::Machine;
use crate::core::control::ControlUnit;
use crate::core::pipeline::latches::{IdEx, PipelineLatch};
use crate::core::pipeline::traits::{PipelineStage, StageOutcome};
use crate::isa::{Format, Immediate, Instruction};

/// The decode stage.
#[derive(Debug)]
pub struct Decode;

/// The source register indices an instruction actually reads.
fn source_regs(instr: &Instruction) -> (Option<usize>, Option<usize>) {
    match instr.format() {
        Format::R | Format::S | Format::B => (Some(instr.rs1()), Some(instr.rs2())),
        Format::I => (Some(instr.rs1()), None),
        Format::U | Format::J => (None, None),
    }
}

/// Whether a downstream latch will write one of the given source registers.
fn hazard_against(rd: usize, reg_we: bool, valid: bool, srcs: (Option<usize>, Option<usize>)) -> bool {
    valid && reg_we && rd != 0 && (srcs.0 == Some(rd) || srcs.1 == Some(rd))
}

impl PipelineStage for Decode {
    fn run(machine: &mut Machine) -> Result<StageOutcome, SimError> {
        if machine.redirect {
            trace!("ID  squash, control redirect in flight");
            machine.if_id.flush();
            machine.id_ex = IdEx::default();
            return Ok(StageOutcome::Advanced);
        }

        let if_id = machine.if_id;
        if if_id.is_bubble() {
            machine.id_ex = IdEx::default();
            return Ok(StageOutcome::Advanced);
        }

        let (instr, ctrl) = ControlUnit::decode(if_id.inst)?;
        let srcs = source_regs(&instr);

        let ex = &machine.ex_mem;
        let wb = &machine.mem_wb;
        if hazard_against(ex.rd, ex.we.reg_we, ex.valid, srcs)
            || hazard_against(wb.rd, wb.we.reg_we, wb.valid, srcs)
        {
            trace!("ID  pc={:#010x} stall, source register in flight", if_id.pc.byte());
            machine.id_ex = IdEx::default();
            return Ok(StageOutcome::Stalled);
        }

        let rv1 = srcs.0.map_or(0, |r| machine.regs.read(r));
        let rv2 = srcs.1.map_or(0, |r| machine.regs.read(r));
        let rd = match instr.format() {
            Format::R | Format::I | Format::U | Format::J => instr.rd(),
            Format::S | Format::B => 0,
        };
        let imm = Immediate::decode(&instr, ctrl.jump_reg);

        trace!(
            "ID  pc={:#010x} inst={:#010x} imm={}",
            if_id.pc.byte(),
            instr.raw(),
            imm.value()
        );

        machine.id_ex = IdEx {
            pc: if_id.pc,
            instr,
            rs1: srcs.0.unwrap_or(0),
            rs2: srcs.1.unwrap_or(0),
            rd,
            imm,
            rv1,
            rv2,
            ctrl,
            valid: true,
        };
        Ok(StageOutcome::Advanced)
    }
}
