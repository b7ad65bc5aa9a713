//! Configuration validation
//!
//! Validates config consistency:
//! - Enabled sinks have a path
//! - Buffer sizes are non-zero
//! - No two enabled sinks write the same file

use crate::Config;
use crate::error::{ConfigError, Result};
use std::collections::BTreeMap;

/// Validate the entire configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_sinks(config)?;
    validate_paths(config)?;
    Ok(())
}

/// Validate per-sink fields
fn validate_sinks(config: &Config) -> Result<()> {
    for (name, sink) in config.sinks.enabled() {
        if sink.path.trim().is_empty() {
            return Err(ConfigError::missing_field(name, "path"));
        }

        if sink.buffer_size == 0 {
            return Err(ConfigError::invalid_value(
                name,
                "buffer_size",
                "must be greater than 0",
            ));
        }
    }

    Ok(())
}

/// Reject enabled sinks sharing one file
fn validate_paths(config: &Config) -> Result<()> {
    let mut paths: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for (name, sink) in config.sinks.enabled() {
        paths.entry(sink.path.as_str()).or_default().push(name);
    }

    if let Some((path, sinks)) = paths.into_iter().find(|(_, sinks)| sinks.len() > 1) {
        return Err(ConfigError::duplicate_path(path, sinks.join(", ")));
    }

    Ok(())
}
