//! Simulation driver.
//!
//! 1. **Loader:** Builds an instruction image from words or raw bytes.
//! 2. **Simulator:** The cycle loop and run-to-completion driver.

/// Program image loading.
pub mod loader;

/// The cycle-level simulation driver.
pub mod simulator;

pub use simulator::{RunOutcome, Simulator};
