//! Combinational and storage units of the core.
//!
//! 1. **ALU:** Arithmetic, logic, and shift operations.
//! 2. **Comparator:** Branch condition resolution.
//! 3. **Write-enable gating:** Validity-gated effect requests.
//! 4. **Instruction memory:** The read-only loaded program image.
//! 5. **Data memory:** The sparse word-addressed data store.

/// Arithmetic logic unit.
pub mod alu;

/// Branch comparator.
pub mod cmp;

/// Sparse data memory.
pub mod dmem;

/// Instruction memory.
pub mod imem;

/// Write-enable gating.
pub mod wegen;

pub use alu::Alu;
pub use cmp::Comparator;
pub use dmem::DataMemory;
pub use imem::InstructionMemory;
pub use wegen::WriteEnables;
