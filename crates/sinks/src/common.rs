//! Common types for sinks
//!
//! Errors and metrics shared by every sink type.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

/// Result type for sink construction
pub type Result<T> = std::result::Result<T, SinkError>;

/// Per-sink counters
#[derive(Debug, Default)]
pub struct SinkMetrics {
    /// Lines appended to the active file
    pub lines_written: AtomicU64,

    /// Bytes appended, including line terminators
    pub bytes_written: AtomicU64,

    /// Write, flush or rotation failures (absorbed)
    pub write_errors: AtomicU64,

    /// Completed rotations
    pub rotations: AtomicU64,

    /// Entries dropped because the sink was closed
    pub dropped_closed: AtomicU64,
}

impl SinkMetrics {
    /// Create new metrics instance
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
            dropped_closed: AtomicU64::new(0),
        }
    }

    /// Record a line appended
    #[inline]
    pub fn line_written(&self, bytes: u64) {
        self.lines_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Record a write error
    #[inline]
    pub fn write_error(&self) {
        self.write_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completed rotation
    #[inline]
    pub fn rotation(&self) {
        self.rotations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an entry dropped after close
    #[inline]
    pub fn dropped_closed(&self) {
        self.dropped_closed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            lines_written: self.lines_written.load(Ordering::Relaxed),
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
            write_errors: self.write_errors.load(Ordering::Relaxed),
            rotations: self.rotations.load(Ordering::Relaxed),
            dropped_closed: self.dropped_closed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of sink metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub lines_written: u64,
    pub bytes_written: u64,
    pub write_errors: u64,
    pub rotations: u64,
    pub dropped_closed: u64,
}

/// Sink errors
///
/// `InvalidArgument`, `CreateDir` and `OpenFile` are construction failures
/// and are returned to the caller. `Write` and `Rotate` happen at log time;
/// they are reported to the diagnostic channel and never returned from
/// `Sink::log`.
#[derive(Debug, Error)]
pub enum SinkError {
    /// A required argument was absent or empty
    #[error(transparent)]
    InvalidArgument(#[from] chronicle_core::Error),

    /// Failed to create the containing directory
    #[error("failed to create directory: {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open the log file
    #[error("failed to open log file: {}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to append or flush
    #[error("failed to write log file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to shift rolled files
    #[error("failed to rotate log file: {}", path.display())]
    Rotate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SinkError {
    /// Whether this error was raised while constructing a sink
    pub fn is_init_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::CreateDir { .. } | Self::OpenFile { .. }
        )
    }

    /// Path the error relates to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::CreateDir { path, .. }
            | Self::OpenFile { path, .. }
            | Self::Write { path, .. }
            | Self::Rotate { path, .. } => Some(path),
        }
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod common_test;
