//! Line formatting
//!
//! A formatter turns one entry into one line of text (without terminator).
//! It receives the serializer from the context that was current at write
//! time, so swapping the serializer needs no formatter change.

use std::fmt::Write as FmtWrite;

use crate::entry::LogEntry;
use crate::serialize::PropertySerializer;

/// Timestamp layout used by [`DefaultFormatter`] (`yyyy-MM-dd HH:mm:ss.fff`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Formats a single entry into a line
///
/// Implementations must be pure and must not panic; errors degrade into the
/// output text.
pub trait LogFormatter: Send + Sync {
    fn format(&self, entry: &LogEntry<'_>, serializer: &dyn PropertySerializer) -> String;
}

/// Pipe-delimited human-readable format
///
/// ```text
/// 2025-01-15 10:30:45.123|Info|Game initialization started| | {"timestamp":"..."}
/// 2025-01-15 10:30:45.125|Info|Game initialization completed|
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl DefaultFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl LogFormatter for DefaultFormatter {
    fn format(&self, entry: &LogEntry<'_>, serializer: &dyn PropertySerializer) -> String {
        let mut line = String::with_capacity(64 + entry.message.len());

        // write! into a String cannot fail
        let _ = write!(
            line,
            "{}|{}|{}|",
            entry.timestamp.format(TIMESTAMP_FORMAT),
            entry.level,
            entry.message,
        );

        if !entry.properties.is_empty() {
            line.push_str(" | ");
            line.push_str(&serializer.serialize(entry.properties));
        }

        line
    }
}
