//! The five pipeline stages.
//!
//! 1. **Fetch:** Reads the instruction word at the program counter.
//! 2. **Decode:** Classifies the word, reads registers, detects hazards.
//! 3. **Execute:** ALU, branch resolution, redirects.
//! 4. **Memory:** Data memory loads and stores.
//! 5. **Writeback:** Register file update and retirement.

/// Instruction fetch.
pub mod fetch;

/// Instruction decode and hazard detection.
pub mod decode;

/// Execution and branch resolution.
pub mod execute;

/// Data memory access.
pub mod memory;

/// Register writeback and retirement.
pub mod writeback;

pub use decode::Decode;
pub use execute::Execute;
pub use fetch::Fetch;
pub use memory::Memory;
pub use writeback::Writeback;
