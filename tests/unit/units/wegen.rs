//! Write-enable gating tests.

use rvscalar::core::units::WriteEnables;

#[test]
fn valid_slot_passes_requests_through() {
    let we = WriteEnables::gate(true, false, false, true);
    assert!(we.reg_we);
    assert!(!we.mem_we);
    assert!(!we.halt);

    let we = WriteEnables::gate(false, true, true, true);
    assert!(!we.reg_we);
    assert!(we.mem_we);
    assert!(we.halt);
}

/// An invalid slot never produces an enable, whatever it requests.
#[test]
fn invalid_slot_suppresses_everything() {
    let we = WriteEnables::gate(true, true, true, false);
    assert!(!we.reg_we);
    assert!(!we.mem_we);
    assert!(!we.halt);
}

#[test]
fn bubble_default_has_no_effects() {
    let we = WriteEnables::default();
    assert!(!we.reg_we && !we.mem_we && !we.halt);
}
