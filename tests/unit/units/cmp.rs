//! Comparator relation tests.

use rstest::rstest;
use rvscalar::core::pipeline::signals::CmpOp;
use rvscalar::core::units::Comparator;

#[rstest]
#[case(CmpOp::Eq, 5, 5, true)]
#[case(CmpOp::Eq, 5, 6, false)]
#[case(CmpOp::Ne, 5, 6, true)]
#[case(CmpOp::Ne, 5, 5, false)]
#[case(CmpOp::Lt, -1i32 as u32, 1, true)]
#[case(CmpOp::Lt, 1, -1i32 as u32, false)]
#[case(CmpOp::Ge, 1, -1i32 as u32, true)]
#[case(CmpOp::Ge, -1i32 as u32, -1i32 as u32, true)]
#[case(CmpOp::Ltu, 1, u32::MAX, true)]
#[case(CmpOp::Ltu, u32::MAX, 1, false)]
#[case(CmpOp::Geu, u32::MAX, 1, true)]
#[case(CmpOp::Geu, 0, 0, true)]
fn relations(#[case] op: CmpOp, #[case] a: u32, #[case] b: u32, #[case] expected: bool) {
    assert_eq!(Comparator::compare(op, a, b), expected);
}

/// Signed and unsigned orderings disagree exactly when the sign bits differ.
#[test]
fn signed_vs_unsigned_divergence() {
    let neg = 0x8000_0000;
    let pos = 0x7FFF_FFFF;
    assert!(Comparator::compare(CmpOp::Lt, neg, pos));
    assert!(!Comparator::compare(CmpOp::Ltu, neg, pos));
}
