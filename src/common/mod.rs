//! Common utilities and types used throughout the pipeline simulator.
//!
//! This module provides fundamental building blocks shared across all
//! components of the simulator. It includes:
//! 1. **Bit-field Utilities:** Range extraction, field concatenation, and
//!    sign-extension over 32-bit words.
//! 2. **Program Counter:** A word-aligned instruction-slot counter.
//! 3. **Error Handling:** The fatal error taxonomy for aborted runs.

/// Bit-field extraction, concatenation, and sign-extension helpers.
pub mod bits;

/// Fatal error types.
pub mod error;

/// Program counter type.
pub mod pc;

pub use error::SimError;
pub use pc::Pc;
