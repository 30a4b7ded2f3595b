/// Tests for shared utilities (bit fields, program counter).
pub mod common;


/// Tests for the functional units.
pub mod units;
