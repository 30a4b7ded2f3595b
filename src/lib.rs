//! Cycle-level scalar pipelined RV32I simulator core.
//!
//! This crate implements a functional simulator for a scalar, in-order,
//! five-stage pipelined RISC-V core with the following:
//! 1. **Core:** Pipeline (fetch, decode, execute, memory, writeback), GPR state,
//!    and per-instruction control-signal derivation.
//! 2. **ISA:** Classification and field extraction for the six RV32I encoding
//!    formats, and immediate reconstruction per format.
//! 3. **Memory:** A word-indexed instruction memory and a sparse, word-indexed
//!    data memory with byte/half/word access widths.
//! 4. **Simulation:** Driver loop, program loader, configuration, and
//!    statistics collection.

/// Common types and utilities (bit-field helpers, program counter, errors).
pub mod common;
/// Simulator configuration (defaults and deserializable config structure).
pub mod config;
/// CPU core (machine state, control unit, pipeline, functional units).
pub mod core;
/// Instruction set (encoding formats, field accessors, immediates, opcodes).
pub mod isa;
/// Program loading and the cycle-stepping driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Shared machine state threaded through every pipeline stage.
pub use crate::core::Machine;
/// Fatal simulation errors (aborts the run).
pub use crate::common::SimError;
/// Cycle-stepping driver; owns the machine and the statistics.
pub use crate::sim::simulator::{RunOutcome, Simulator};
