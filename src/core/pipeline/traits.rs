//! Pipeline stage protocol.

use crate::common::SimError;
use crate::core::Machine;

/// Per-cycle outcome of running a pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageOutcome {
    /// The stage completed its work for this cycle.
    Advanced,
    /// The stage held its input back (hazard); upstream must not advance.
    Stalled,
    /// A halt instruction retired; the machine must stop.
    Halted,
}

/// A pipeline stage.
///
/// Stages are stateless; all state lives in the [`Machine`]. Each cycle the
/// engine invokes the stages in reverse order (writeback first, fetch last)
/// so every stage reads its input latch before the upstream stage
/// overwrites it.
pub trait PipelineStage {
    /// Runs the stage for one cycle.
    ///
    /// # Errors
    ///
    /// Returns a [`SimError`] when the stage encounters a condition the
    /// machine cannot recover from, such as an illegal instruction.
    fn run(machine: &mut Machine) -> Result<StageOutcome, SimError>;
}
