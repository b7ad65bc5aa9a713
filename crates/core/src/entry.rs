//! Log entry view

use chrono::{DateTime, Utc};

use crate::level::Level;

/// Insertion-ordered property mapping; a repeated key overwrites in place
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// One entry as seen by a formatter
///
/// Borrowed for the duration of a single write; never retained.
#[derive(Debug, Clone, Copy)]
pub struct LogEntry<'a> {
    /// UTC instant captured at write time
    pub timestamp: DateTime<Utc>,
    /// Entry level (never `Off`)
    pub level: Level,
    /// Free-form message
    pub message: &'a str,
    /// Structured properties
    pub properties: &'a Properties,
}

impl<'a> LogEntry<'a> {
    /// Create an entry stamped with the current time
    pub fn now(level: Level, message: &'a str, properties: &'a Properties) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message,
            properties,
        }
    }
}
