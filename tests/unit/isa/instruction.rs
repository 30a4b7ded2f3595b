//! Format classification and field accessor tests.

use rstest::rstest;
use rvscalar::common::SimError;
use rvscalar::isa::{Format, Instruction};

use crate::common::asm::{asm, ebreak, nop};

#[rstest]
#[case(asm().add(3, 1, 2).build(), Format::R)]
#[case(asm().addi(11, 0, 5).build(), Format::I)]
#[case(asm().lw(4, 0, 0).build(), Format::I)]
#[case(asm().jalr(1, 5, 0).build(), Format::I)]
#[case(ebreak(), Format::I)]
#[case(asm().sw(0, 3, 0).build(), Format::S)]
#[case(asm().beq(1, 2, 8).build(), Format::B)]
#[case(asm().lui(1, 0x12345000).build(), Format::U)]
#[case(asm().auipc(1, 0x1000).build(), Format::U)]
#[case(asm().jal(1, 8).build(), Format::J)]
fn classifies_every_opcode_group(#[case] raw: u32, #[case] format: Format) {
    let instr = Instruction::decode(raw).unwrap();
    assert_eq!(instr.format(), format);
}

#[test]
fn unknown_opcode_is_illegal() {
    assert_eq!(
        Instruction::decode(0x0000_007F),
        Err(SimError::IllegalInstruction(0x0000_007F))
    );
    assert_eq!(Instruction::decode(0), Err(SimError::IllegalInstruction(0)));
}

#[test]
fn default_is_the_canonical_nop() {
    let instr = Instruction::default();
    assert_eq!(instr.raw(), nop());
    assert_eq!(instr.format(), Format::I);
}

#[test]
fn field_accessors_project_fixed_ranges() {
    // ADD x3, x1, x2
    let instr = Instruction::decode(asm().add(3, 1, 2).build()).unwrap();
    assert_eq!(instr.rd(), 3);
    assert_eq!(instr.rs1(), 1);
    assert_eq!(instr.rs2(), 2);
    assert_eq!(instr.funct3(), 0);
    assert_eq!(instr.funct7(), 0);

    // SW x7, 12(x5)
    let instr = Instruction::decode(asm().sw(5, 7, 12).build()).unwrap();
    assert_eq!(instr.rs1(), 5);
    assert_eq!(instr.rs2(), 7);
    assert_eq!(instr.funct3(), 2);
}

#[test]
fn known_encoding_addi_x11_x0_5() {
    let instr = Instruction::decode(0x0050_0593).unwrap();
    assert_eq!(instr.format(), Format::I);
    assert_eq!(instr.rd(), 11);
    assert_eq!(instr.rs1(), 0);
    assert_eq!(instr.funct3(), 0);
}
