
/// Comparator relation tests.
pub mod cmp;


/// Register file tests.
pub mod gpr;

/// Write-enable gating tests.
pub mod wegen;
