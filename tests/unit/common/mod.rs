/// Bit-field helper tests.
pub mod bits;
