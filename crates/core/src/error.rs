//! Core error types

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at API-misuse call sites
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument was absent or empty
    #[error("invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// Argument name
        argument: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// Unknown level name or out-of-range ordinal
    #[error("unknown level: {0}")]
    InvalidLevel(String),
}

impl Error {
    /// Create an InvalidArgument error
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Both variants are argument errors; an unknown level is a bad argument too
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::InvalidLevel(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid_argument("path", "must not be empty");
        assert_eq!(err.to_string(), "invalid argument 'path': must not be empty");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_invalid_level_display() {
        let err = Error::InvalidLevel("verbose".into());
        assert_eq!(err.to_string(), "unknown level: verbose");
        assert!(err.is_invalid_argument());
    }
}
