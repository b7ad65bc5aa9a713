//! File sink configuration
//!
//! Sinks are named instances, allowing several log files with different
//! rotation policies (e.g. an application log and an audit log).

use serde::Deserialize;
use std::collections::BTreeMap;

/// Default write buffer size (4KB)
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Default size threshold for rotation (10MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default number of rolled files kept
pub const DEFAULT_MAX_ROLLING_FILES: i64 = 5;

/// Container for all file sink configurations
///
/// # Example
///
/// ```toml
/// [sinks.game]
/// path = "logs/game.log"
///
/// [sinks.audit]
/// path = "logs/audit.log"
/// max_file_size = 1048576
/// max_rolling_files = 20
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SinksConfig {
    /// Named sink instances, iterated in name order
    #[serde(flatten)]
    sinks: BTreeMap<String, FileSinkConfig>,
}

impl SinksConfig {
    /// Get a sink by name
    pub fn get(&self, name: &str) -> Option<&FileSinkConfig> {
        self.sinks.get(name)
    }

    /// Check if a sink exists
    pub fn contains(&self, name: &str) -> bool {
        self.sinks.contains_key(name)
    }

    /// Iterate over all sinks in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FileSinkConfig)> {
        self.sinks.iter()
    }

    /// Iterate over enabled sinks in name order
    pub fn enabled(&self) -> impl Iterator<Item = (&String, &FileSinkConfig)> {
        self.sinks.iter().filter(|(_, sink)| sink.enabled)
    }

    /// Get the number of configured sinks
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Check if no sinks are configured
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Add or replace a sink
    pub fn insert(&mut self, name: impl Into<String>, config: FileSinkConfig) {
        self.sinks.insert(name.into(), config);
    }
}

/// Configuration for a single file sink
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileSinkConfig {
    /// Whether this sink is enabled
    /// Default: true
    pub enabled: bool,

    /// Active log file path; rolled files get `.1`, `.2`, ... suffixes
    /// Required when enabled
    pub path: String,

    /// Write buffer size in bytes
    /// Default: 4KB
    pub buffer_size: usize,

    /// Flush to the OS after every entry
    /// Default: true
    pub auto_flush: bool,

    /// Rotate once the active file exceeds this size; 0 disables rotation
    /// Default: 10MB
    pub max_file_size: u64,

    /// Number of rolled files kept; zero or negative disables rotation
    /// Default: 5
    pub max_rolling_files: i64,
}

impl Default for FileSinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: String::new(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            auto_flush: true,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_rolling_files: DEFAULT_MAX_ROLLING_FILES,
        }
    }
}

impl FileSinkConfig {
    /// Create a config for `path` with all other fields defaulted
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Rolled-file count with non-positive values mapped to 0 (no rotation)
    pub fn rolling_files(&self) -> u32 {
        u32::try_from(self.max_rolling_files.max(0)).unwrap_or(u32::MAX)
    }

    /// Whether size-based rotation can ever happen
    pub fn rotation_enabled(&self) -> bool {
        self.max_file_size > 0 && self.rolling_files() > 0
    }
}
