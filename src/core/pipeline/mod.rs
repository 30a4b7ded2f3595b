//! The five-stage in-order pipeline.
//!
//! 1. **Signals:** Control signals and operation selectors.
//! 2. **Latches:** Inter-stage state with explicit bubble semantics.
//! 3. **Traits:** The stage protocol and per-cycle outcomes.
//! 4. **Stages:** Fetch, decode, execute, memory, and writeback.

/// Inter-stage latches.
pub mod latches;

/// Control signals and operation selectors.
pub mod signals;

/// The five stage implementations.
pub mod stages;

/// Stage protocol.
pub mod traits;

pub use traits::{PipelineStage, StageOutcome};
