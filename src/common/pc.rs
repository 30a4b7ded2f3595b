//! Program counter type.
//!
//! The program counter tracks word-aligned instruction slots rather than raw
//! byte addresses: internally it stores a slot index, and byte-offset
//! arithmetic divides by the instruction size. This keeps instruction-memory
//! indexing trivial while preserving byte-address semantics at the ISA
//! boundary (link values, PC-relative operands).

/// Size of one instruction in bytes.
pub const INSTR_BYTES: u32 = 4;

/// A word-aligned program counter.
///
/// Stores the instruction slot index; the byte address is always
/// `slot * 4`. Mutated by the fetch stage each cycle (normally one slot
/// forward) and overridden by the execute stage on taken branches and jumps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pc(u32);

impl Pc {
    /// Creates a program counter at the given instruction slot.
    pub fn from_slot(slot: u32) -> Self {
        Self(slot)
    }

    /// Creates a program counter from a byte address.
    ///
    /// # Panics
    ///
    /// Panics if the address is not word-aligned.
    pub fn from_byte(addr: u32) -> Self {
        assert!(addr % INSTR_BYTES == 0, "misaligned pc byte address {addr:#x}");
        Self(addr / INSTR_BYTES)
    }

    /// Returns the logical value: the instruction slot index.
    pub fn logical(self) -> u32 {
        self.0
    }

    /// Returns the byte address of the slot (`slot * 4`).
    pub fn byte(self) -> u32 {
        self.0.wrapping_mul(INSTR_BYTES)
    }

    /// Advances to the next instruction slot.
    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Returns the counter displaced by a signed byte offset.
    ///
    /// # Panics
    ///
    /// Panics if the offset is not word-aligned.
    pub fn offset(self, byte_offset: i32) -> Self {
        assert!(
            byte_offset % INSTR_BYTES as i32 == 0,
            "misaligned pc offset {byte_offset}"
        );
        Self(self.0.wrapping_add_signed(byte_offset / INSTR_BYTES as i32))
    }
}
