//! Instruction fetch stage.

use tracing::trace;

use crate::common::SimError;
use crate::core::Machine;
use crate::core::pipeline::latches::IfId;
use crate::core::pipeline::traits::{PipelineStage, StageOutcome};

/// The fetch stage.
///
/// Reads the instruction word at the current program counter into the
/// fetch/decode latch and advances the counter. Past the end of the image
/// it inserts bubbles instead, letting the in-flight tail drain.
#[derive(Debug)]
pub struct Fetch;

impl PipelineStage for Fetch {
    fn run(machine: &mut Machine) -> Result<StageOutcome, SimError> {
        let pc = machine.pc;
        match machine.imem.fetch(pc) {
            Some(word) => {
                trace!("IF  pc={:#010x} inst={:#010x}", pc.byte(), word);
                machine.if_id = IfId {
                    pc,
                    inst: word,
                    valid: true,
                };
                machine.pc.advance();
            }
            None => {
                trace!("IF  pc={:#010x} past image end, bubble", pc.byte());
                machine.if_id = IfId::default();
            }
        }
        Ok(StageOutcome::Advanced)
    }
}
