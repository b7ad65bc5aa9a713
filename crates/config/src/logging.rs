//! Logging configuration
//!
//! Seeds the shared context: the minimum level entries must reach.

use chronicle_core::Level;
use serde::Deserialize;

/// Logging configuration
///
/// # Example
///
/// ```toml
/// [log]
/// minimum_level = "debug"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level (trace, debug, info, warn, error, fatal, off)
    /// Default: info
    pub minimum_level: Level,
}
