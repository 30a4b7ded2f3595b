//! Simulator configuration.
//!
//! Configuration is supplied as JSON by embedding callers or built with
//! `Config::default()` for programmatic use.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Default cycle budget for a run.
    pub const MAX_CYCLES: u64 = 1_000_000;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use rvscalar::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.max_cycles, 1_000_000);
///
/// let config: Config = serde_json::from_str(r#"{"max_cycles": 0}"#).unwrap();
/// assert_eq!(config.max_cycles, 0);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Cycle budget for a run; zero disables the budget.
    #[serde(default = "Config::default_max_cycles")]
    pub max_cycles: u64,
}

impl Config {
    /// Returns the default cycle budget.
    fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}
