//! Immediate operand reconstruction.
//!
//! Each encoding format scatters its immediate across a different set of bit
//! ranges. This module reassembles them, applying the format's
//! sign-extension rule and forcing bit 0 to zero for branch and jump
//! offsets (control-flow targets are always even byte offsets). The field
//! widths below sum to exactly 32 per format; [`crate::common::bits::concat`]
//! enforces that invariant.
//!
//! One deliberate mode switch lives at this boundary: for the indirect
//! jump-and-link form (JALR), callers may request the *link* immediate, a
//! fixed operand of 4 used for return-address computation, instead of the
//! encoded I-immediate offset. The execute stage selects the mode
//! explicitly depending on whether it needs the link value or the jump
//! offset.

use crate::common::bits::{concat, extract_range, sign_bit, sign_extend};
use crate::isa::instruction::{Format, Instruction};

/// The immediate operand of the jalr-link convention.
const JALR_LINK_OPERAND: i32 = 4;

/// The immediate category, derived from the encoding format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImmKind {
    /// No immediate (R-format, or the jalr-link mode).
    #[default]
    None,
    /// I-format: 12-bit sign-extended.
    I,
    /// S-format: 12-bit sign-extended, split around the register fields.
    S,
    /// B-format: 13-bit sign-extended, bit 0 forced to zero.
    B,
    /// U-format: upper 20 bits, low 12 bits zero.
    U,
    /// J-format: 21-bit sign-extended, bit 0 forced to zero.
    J,
}

/// A reconstructed immediate operand.
///
/// Derived once per instruction at the decode boundary and immutable
/// thereafter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Immediate {
    kind: ImmKind,
    value: i32,
}

impl Immediate {
    /// Reconstructs the immediate for an instruction.
    ///
    /// With `jalr_link` set (only meaningful for the JALR I-format shape),
    /// the encoded offset is replaced by the fixed link operand 4 and the
    /// kind reports [`ImmKind::None`].
    pub fn decode(instr: &Instruction, jalr_link: bool) -> Self {
        let word = instr.raw();
        match instr.format() {
            Format::R => Self::default(),
            Format::I if jalr_link => Self {
                kind: ImmKind::None,
                value: JALR_LINK_OPERAND,
            },
            Format::I => Self {
                kind: ImmKind::I,
                value: concat(&[
                    (sign_extend(sign_bit(word), 21), 21),
                    (extract_range(word, 30, 20), 11),
                ]) as i32,
            },
            Format::S => Self {
                kind: ImmKind::S,
                value: concat(&[
                    (sign_extend(sign_bit(word), 21), 21),
                    (extract_range(word, 30, 25), 6),
                    (extract_range(word, 11, 7), 5),
                ]) as i32,
            },
            Format::B => Self {
                kind: ImmKind::B,
                value: concat(&[
                    (sign_extend(sign_bit(word), 20), 20),
                    (extract_range(word, 7, 7), 1),
                    (extract_range(word, 30, 25), 6),
                    (extract_range(word, 11, 8), 4),
                    (0, 1),
                ]) as i32,
            },
            Format::U => Self {
                kind: ImmKind::U,
                value: concat(&[(extract_range(word, 31, 12), 20), (0, 12)]) as i32,
            },
            Format::J => Self {
                kind: ImmKind::J,
                value: concat(&[
                    (sign_extend(sign_bit(word), 12), 12),
                    (extract_range(word, 19, 12), 8),
                    (extract_range(word, 20, 20), 1),
                    (extract_range(word, 30, 21), 10),
                    (0, 1),
                ]) as i32,
            },
        }
    }

    /// The immediate category.
    pub fn kind(&self) -> ImmKind {
        self.kind
    }

    /// The signed 32-bit immediate value.
    pub fn value(&self) -> i32 {
        self.value
    }
}
