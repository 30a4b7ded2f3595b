//! Execution statistics collection and reporting.
//!
//! 1. **Cycle and CPI:** Total cycles, retired instructions, cycles per
//!    instruction.
//! 2. **Instruction mix:** Counts by category (ALU, load, store,
//!    branch/jump, system).
//! 3. **Hazards:** Data stall cycles and control flushes.

use serde::Serialize;

/// Execution counters for one simulation run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SimStats {
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Instructions retired at writeback.
    pub instructions_retired: u64,

    /// ALU (non-load/store/branch/system) instructions retired.
    pub inst_alu: u64,
    /// Load instructions retired.
    pub inst_load: u64,
    /// Store instructions retired.
    pub inst_store: u64,
    /// Branch and jump instructions retired.
    pub inst_branch: u64,
    /// System instructions retired.
    pub inst_system: u64,

    /// Stall cycles from data hazards (read-after-write dependencies).
    pub stalls_data: u64,
    /// Taken branches and jumps that squashed the wrong-path fetch.
    pub flushes_control: u64,
}

impl SimStats {
    /// Cycles per retired instruction, or zero before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// The counters rendered as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns the underlying serialization error, which cannot occur for
    /// this plain-counter structure in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
