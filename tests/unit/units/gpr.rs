//! Register file tests.

use rvscalar::core::arch::Gpr;

#[test]
fn x0_reads_zero() {
    let regs = Gpr::new();
    assert_eq!(regs.read(0), 0);
}

#[test]
fn writes_to_x0_are_discarded() {
    let mut regs = Gpr::new();
    regs.write(0, 0xDEAD_BEEF);
    assert_eq!(regs.read(0), 0);
    assert_eq!(regs.snapshot()[0], 0);
}

#[test]
fn other_registers_hold_values() {
    let mut regs = Gpr::new();
    for i in 1..32 {
        regs.write(i, i as u32 * 3);
    }
    for i in 1..32 {
        assert_eq!(regs.read(i), i as u32 * 3);
    }
}

#[test]
#[should_panic]
fn out_of_range_read_panics() {
    Gpr::new().read(32);
}

#[test]
#[should_panic]
fn out_of_range_write_panics() {
    Gpr::new().write(32, 1);
}
