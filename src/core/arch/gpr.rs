//! General-purpose register file.
//!
//! Thirty-two 32-bit registers. Register x0 is hardwired to zero: reads
//! always return zero and writes to it are discarded.

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// The general-purpose register file.
#[derive(Clone, Debug, Default)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a register file with every register zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads register `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    pub fn read(&self, idx: usize) -> u32 {
        assert!(idx < NUM_REGS, "register index {idx} out of range");
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes `value` to register `idx`. Writes to x0 are discarded.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    pub fn write(&mut self, idx: usize, value: u32) {
        assert!(idx < NUM_REGS, "register index {idx} out of range");
        if idx != 0 {
            self.regs[idx] = value;
        }
    }

    /// A copy of the full register state.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        self.regs
    }

    /// Dumps the contents of all registers to stdout, in pairs.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(2) {
            println!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}
