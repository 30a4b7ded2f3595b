//! Inter-stage pipeline latches.
//!
//! Each latch carries one in-flight instruction between adjacent stages.
//! The `valid` flag marks whether the slot holds a real instruction; a
//! latch in its default state is a bubble and must have no architectural
//! effect. Flushing a latch resets it to the bubble state.

use crate::common::Pc;
use crate::core::pipeline::signals::ControlSignals;
use crate::core::units::WriteEnables;
use crate::isa::{Immediate, Instruction};

/// A latch that can be reset to the bubble state.
pub trait PipelineLatch: Default {
    /// Resets the latch to a bubble.
    fn flush(&mut self) {
        *self = Self::default();
    }

    /// Whether the slot currently holds no real instruction.
    fn is_bubble(&self) -> bool;
}

/// Fetch/decode latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct IfId {
    /// Address of the fetched instruction.
    pub pc: Pc,
    /// The raw fetched word.
    pub inst: u32,
    /// Slot validity.
    pub valid: bool,
}

impl PipelineLatch for IfId {
    fn is_bubble(&self) -> bool {
        !self.valid
    }
}

/// Decode/execute latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdEx {
    /// Address of the instruction.
    pub pc: Pc,
    /// The classified instruction.
    pub instr: Instruction,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Destination register index.
    pub rd: usize,
    /// Reconstructed immediate operand.
    pub imm: Immediate,
    /// Value read from rs1.
    pub rv1: u32,
    /// Value read from rs2.
    pub rv2: u32,
    /// Derived control signals.
    pub ctrl: ControlSignals,
    /// Slot validity.
    pub valid: bool,
}

impl PipelineLatch for IdEx {
    fn is_bubble(&self) -> bool {
        !self.valid
    }
}

/// Execute/memory latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExMem {
    /// Address of the instruction.
    pub pc: Pc,
    /// Destination register index.
    pub rd: usize,
    /// ALU result (memory address for loads and stores).
    pub alu: u32,
    /// Value to store for store instructions.
    pub store_data: u32,
    /// Validity-gated write enables.
    pub we: WriteEnables,
    /// Control signals carried forward.
    pub ctrl: ControlSignals,
    /// Slot validity.
    pub valid: bool,
}

impl PipelineLatch for ExMem {
    fn is_bubble(&self) -> bool {
        !self.valid
    }
}

/// Memory/writeback latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemWb {
    /// Address of the instruction.
    pub pc: Pc,
    /// Destination register index.
    pub rd: usize,
    /// ALU result carried forward.
    pub alu: u32,
    /// Value loaded from data memory.
    pub load_data: u32,
    /// Validity-gated write enables.
    pub we: WriteEnables,
    /// Control signals carried forward.
    pub ctrl: ControlSignals,
    /// Slot validity.
    pub valid: bool,
}

impl PipelineLatch for MemWb {
    fn is_bubble(&self) -> bool {
        !self.valid
    }
}
