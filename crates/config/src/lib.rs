//! Chronicle Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! Minimal config should just work - only specify what you need to change.
//!
//! # Parsing
//!
//! ```
//! use chronicle_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[sinks.game]\npath = \"game.log\"").unwrap();
//! assert_eq!(config.sinks.len(), 1);
//! ```
//!
//! # Example Full Config
//!
//! ```toml
//! [log]
//! minimum_level = "debug"
//!
//! [sinks.game]
//! path = "logs/game.log"
//! buffer_size = 4096
//! auto_flush = true
//! max_file_size = 10485760
//! max_rolling_files = 5
//! ```

mod error;
mod logging;
mod sinks;
mod validation;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use error::{ConfigError, Result};
pub use logging::LogConfig;
pub use sinks::{
    DEFAULT_BUFFER_SIZE, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_ROLLING_FILES, FileSinkConfig,
    SinksConfig,
};

use serde::Deserialize;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Context settings (minimum level)
    pub log: LogConfig,

    /// Named file sinks
    pub sinks: SinksConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read, contains invalid TOML, or fails
    /// validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    ///
    /// Prefer using the `FromStr` trait implementation.
    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// Get list of enabled sink names, in name order
    pub fn enabled_sinks(&self) -> Vec<&str> {
        self.sinks.enabled().map(|(name, _)| name.as_str()).collect()
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
