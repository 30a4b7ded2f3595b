//! Whole-program execution tests.
//!
//! Each test assembles a small program, runs it to completion, and checks
//! final architectural state (registers, memory, run outcome).

use pretty_assertions::assert_eq;
use rvscalar::sim::loader;
use rvscalar::{Config, RunOutcome, SimError, Simulator};

use crate::common::asm::{asm, ebreak};
use crate::common::harness::run_ok;

#[test]
fn arithmetic_store_load_roundtrip() {
    let (sim, outcome) = run_ok(vec![
        asm().addi(1, 0, 5).build(),
        asm().addi(2, 0, 7).build(),
        asm().add(3, 1, 2).build(),
        asm().sw(0, 3, 0).build(),
        asm().lw(4, 0, 0).build(),
    ]);
    let regs = sim.registers();
    assert_eq!(outcome, RunOutcome::Drained);
    assert_eq!(regs[3], 12);
    assert_eq!(regs[4], 12);
    assert_eq!(sim.memory(), vec![(0, 12)]);
}

#[test]
fn straight_line_program_retires_everything() {
    let (sim, outcome) = run_ok(vec![
        asm().addi(1, 0, 1).build(),
        asm().addi(2, 0, 2).build(),
        asm().addi(3, 0, 3).build(),
        asm().addi(4, 0, 4).build(),
        asm().addi(5, 0, 5).build(),
    ]);
    assert_eq!(outcome, RunOutcome::Drained);
    assert_eq!(sim.stats().instructions_retired, 5);
    assert_eq!(sim.stats().inst_alu, 5);
    // five stages deep, so at least instructions + 4 cycles
    assert!(sim.stats().cycles >= 9);
    assert!(sim.stats().cpi() > 1.0);
}

#[test]
fn halt_discards_younger_instructions() {
    let (sim, outcome) = run_ok(vec![
        asm().addi(1, 0, 1).build(),
        ebreak(),
        asm().addi(2, 0, 2).build(),
    ]);
    let regs = sim.registers();
    assert_eq!(outcome, RunOutcome::Break);
    assert_eq!(regs[1], 1);
    // fetched and in flight behind the halt, but never retired
    assert_eq!(regs[2], 0);
}

#[test]
fn taken_branch_squashes_wrong_path() {
    let (sim, outcome) = run_ok(vec![
        asm().beq(0, 0, 8).build(),
        asm().addi(1, 0, 1).build(),
        asm().addi(2, 0, 2).build(),
    ]);
    let regs = sim.registers();
    assert_eq!(outcome, RunOutcome::Drained);
    assert_eq!(regs[1], 0);
    assert_eq!(regs[2], 2);
    assert_eq!(sim.stats().flushes_control, 1);
}

#[test]
fn untaken_branch_falls_through() {
    let (sim, _) = run_ok(vec![
        asm().bne(0, 0, 8).build(),
        asm().addi(1, 0, 1).build(),
        asm().addi(2, 0, 2).build(),
    ]);
    let regs = sim.registers();
    assert_eq!(regs[1], 1);
    assert_eq!(regs[2], 2);
    assert_eq!(sim.stats().flushes_control, 0);
}

#[test]
fn jal_links_return_address() {
    let (sim, _) = run_ok(vec![
        asm().jal(1, 8).build(),
        asm().addi(2, 0, 1).build(),
        asm().addi(3, 0, 3).build(),
    ]);
    let regs = sim.registers();
    // link value is the byte address of the next instruction
    assert_eq!(regs[1], 4);
    assert_eq!(regs[2], 0);
    assert_eq!(regs[3], 3);
}

#[test]
fn jalr_jumps_through_register_and_links() {
    let (sim, _) = run_ok(vec![
        asm().addi(1, 0, 12).build(),
        asm().jalr(2, 1, 0).build(),
        asm().addi(3, 0, 1).build(),
        asm().addi(4, 0, 4).build(),
    ]);
    let regs = sim.registers();
    assert_eq!(regs[2], 8);
    assert_eq!(regs[3], 0);
    assert_eq!(regs[4], 4);
}

#[test]
fn jalr_target_drops_bit_zero() {
    let (sim, _) = run_ok(vec![
        asm().addi(1, 0, 13).build(),
        asm().jalr(2, 1, 0).build(),
        asm().addi(3, 0, 1).build(),
        asm().addi(4, 0, 4).build(),
    ]);
    // 13 & !1 = 12, the fourth slot
    assert_eq!(sim.registers()[4], 4);
    assert_eq!(sim.registers()[3], 0);
}

#[test]
fn countdown_loop_with_negative_branch_offset() {
    let (sim, outcome) = run_ok(vec![
        asm().addi(1, 0, 3).build(),
        asm().addi(2, 0, 0).build(),
        asm().addi(2, 2, 1).build(),
        asm().addi(1, 1, -1).build(),
        asm().bne(1, 0, -8).build(),
    ]);
    let regs = sim.registers();
    assert_eq!(outcome, RunOutcome::Drained);
    assert_eq!(regs[1], 0);
    assert_eq!(regs[2], 3);
    assert_eq!(sim.stats().flushes_control, 2);
}

#[test]
fn upper_immediates() {
    let (sim, _) = run_ok(vec![
        asm().lui(1, 0x1234_5000_u32 as i32).build(),
        asm().auipc(2, 0x1000).build(),
    ]);
    let regs = sim.registers();
    assert_eq!(regs[1], 0x1234_5000);
    // auipc sits at byte address 4
    assert_eq!(regs[2], 0x1004);
}

#[test]
fn sub_word_memory_accesses() {
    let (sim, _) = run_ok(vec![
        asm().addi(1, 0, 0x80).build(),
        asm().sb(0, 1, 0).build(),
        asm().lb(2, 0, 0).build(),
        asm().lbu(3, 0, 0).build(),
    ]);
    let regs = sim.registers();
    assert_eq!(regs[2], 0xFFFF_FF80);
    assert_eq!(regs[3], 0x0000_0080);
}

#[test]
fn illegal_instruction_aborts_the_run() {
    let mut sim = Simulator::new(
        loader::from_words(vec![0xFFFF_FFFF]),
        &Config::default(),
    );
    assert_eq!(sim.run(), Err(SimError::IllegalInstruction(0xFFFF_FFFF)));
}

#[test]
fn misaligned_jump_target_aborts_the_run() {
    let mut sim = Simulator::new(
        loader::from_words(vec![
            asm().addi(1, 0, 2).build(),
            asm().jalr(2, 1, 0).build(),
        ]),
        &Config::default(),
    );
    assert_eq!(
        sim.run(),
        Err(SimError::MisalignedTarget { pc: 4, target: 2 })
    );
}

#[test]
fn cycle_budget_stops_infinite_loops() {
    let config = Config { max_cycles: 100 };
    let mut sim = Simulator::new(
        loader::from_words(vec![asm().jal(0, 0).build()]),
        &config,
    );
    assert_eq!(sim.run(), Ok(RunOutcome::CycleLimit));
    assert_eq!(sim.stats().cycles, 100);
}

#[test]
fn empty_image_drains_immediately() {
    let (sim, outcome) = run_ok(vec![]);
    assert_eq!(outcome, RunOutcome::Drained);
    assert_eq!(sim.stats().instructions_retired, 0);
}

#[test]
fn loader_rejects_ragged_byte_streams() {
    assert_eq!(
        loader::from_le_bytes(&[0x13, 0x00, 0x00]).err(),
        Some(SimError::TruncatedImage(3))
    );
    let imem = loader::from_le_bytes(&[0x13, 0x00, 0x00, 0x00]).unwrap();
    assert_eq!(imem.len(), 1);
}
