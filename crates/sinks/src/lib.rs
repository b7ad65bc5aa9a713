//! Chronicle - Sinks
//!
//! Sinks durably record leveled log entries. Callers build entries through
//! the fluent API on [`SinkExt`] and commit them; sinks gate, format and
//! write.
//!
//! # Architecture
//!
//! Everything runs synchronously on the caller's thread. There are no
//! background tasks or queues.
//!
//! ```text
//! [caller] → sink.info() → [Entry] → commit → [FanoutSink] → [FileSink] → disk
//!                 ↑                                  ↓
//!          ContextHandle (level gate)           [FileSink] → disk
//! ```
//!
//! # Available Sinks
//!
//! | Sink | Purpose | Uses Rotation |
//! |------|---------|---------------|
//! | `file` | Human-readable log file | Yes (size-based) |
//! | `fanout` | Broadcast to member sinks | No |
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use chronicle_core::{ContextHandle, Level};
//! use chronicle_sinks::{FanoutSink, FileSink, SinkExt};
//!
//! let context = ContextHandle::new();
//! context.set_minimum_level(Level::Debug);
//!
//! let game = FileSink::new("logs/game.log", context.clone()).unwrap();
//! let fanout = FanoutSink::new();
//! fanout.add_sink(Arc::new(game));
//!
//! fanout
//!     .info()
//!     .message("Game initialization started")
//!     .property("levelId", "level_001")
//!     .commit();
//! ```

// =============================================================================
// Sink implementations (each in its own submodule)
// =============================================================================

/// File sink - size-rotated human-readable log file
pub mod file;

/// Fanout sink - broadcast to an ordered set of sinks
pub mod fanout;

// =============================================================================
// Entry API
// =============================================================================

/// The `Sink` capability and level factories
mod sink;

/// Fluent entry builder
mod builder;

// =============================================================================
// Shared utilities
// =============================================================================

/// File I/O helpers and the diagnostic channel
pub mod util;

/// Common types shared by all sinks (errors, metrics)
mod common;

/// Building sinks from `chronicle-config`
mod config;

#[cfg(test)]
mod test_util;

// =============================================================================
// Public re-exports
// =============================================================================

pub use builder::{Entry, EntryBuilder};
pub use common::{MetricsSnapshot, Result, SinkError, SinkMetrics};
pub use config::context_from_config;
pub use fanout::FanoutSink;
pub use file::{FileSink, FileSinkOptions};
pub use sink::{Sink, SinkExt};
