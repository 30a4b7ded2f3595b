//! Write-enable gating.
//!
//! Control signals carry effect *requests*; this unit converts them into
//! actual enables by gating every request with the pipeline slot's validity
//! flag. A squashed or bubble slot therefore has no observable effect on
//! architectural state, no matter what its stale signals request.

/// Gated write enables carried by an instruction past the execute stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteEnables {
    /// The instruction will write its destination register at writeback.
    pub reg_we: bool,
    /// The instruction will write data memory.
    pub mem_we: bool,
    /// The instruction will halt the machine at writeback.
    pub halt: bool,
}

impl WriteEnables {
    /// Gates the requested effects with the slot's validity.
    pub fn gate(reg_write: bool, mem_write: bool, ebreak: bool, valid: bool) -> Self {
        Self {
            reg_we: reg_write && valid,
            mem_we: mem_write && valid,
            halt: ebreak && valid,
        }
    }
}
