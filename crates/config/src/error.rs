//! Configuration error types

use std::io;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("failed to read config file '{path}': {source}")]
    IoError {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Validation error - required field missing
    #[error("sink '{name}' is missing required field '{field}'")]
    MissingField {
        /// Name of the sink
        name: String,
        /// Missing field name
        field: &'static str,
    },

    /// Validation error - invalid value
    #[error("sink '{name}' has invalid {field}: {message}")]
    InvalidValue {
        /// Name of the sink
        name: String,
        /// Field name
        field: &'static str,
        /// Error message
        message: String,
    },

    /// Validation error - two enabled sinks write the same file
    #[error("path '{path}' is used by multiple sinks: {sinks}")]
    DuplicatePath {
        /// The conflicting path
        path: String,
        /// Sinks using this path
        sinks: String,
    },
}

impl ConfigError {
    /// Create a MissingField error
    pub fn missing_field(name: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            name: name.into(),
            field,
        }
    }

    /// Create an InvalidValue error
    pub fn invalid_value(
        name: impl Into<String>,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            name: name.into(),
            field,
            message: message.into(),
        }
    }

    /// Create a DuplicatePath error
    pub fn duplicate_path(path: impl Into<String>, sinks: impl Into<String>) -> Self {
        Self::DuplicatePath {
            path: path.into(),
            sinks: sinks.into(),
        }
    }
}
