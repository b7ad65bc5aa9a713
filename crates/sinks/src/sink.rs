//! The sink capability
//!
//! A sink records entries. [`Sink`] is object-safe so heterogeneous sinks can
//! live behind `Arc<dyn Sink>`; [`SinkExt`] adds the per-level entry factories
//! on top of any sink, trait objects included.

use chronicle_core::{Level, Properties};

use crate::builder::{Entry, EntryBuilder};

/// Something that durably records log entries
pub trait Sink: Send + Sync {
    /// Name used in diagnostics
    fn name(&self) -> &str;

    /// Record one entry
    ///
    /// Never fails from the caller's point of view: write problems are
    /// absorbed and reported by the sink itself.
    fn log(&self, level: Level, message: &str, properties: &Properties);

    /// Factory-time gate consulted by [`SinkExt::entry`]
    fn accepts(&self, level: Level) -> bool;

    /// Release held resources; must be idempotent
    fn close(&self) {}
}

/// Fluent entry factories, available on every sink
pub trait SinkExt: Sink {
    /// Start an entry at `level`
    ///
    /// The gate is evaluated once, here. `Off` is never a valid entry level
    /// and always yields [`Entry::Disabled`].
    fn entry(&self, level: Level) -> Entry<'_, Self> {
        if level.is_logging_level() && self.accepts(level) {
            Entry::Enabled(EntryBuilder::new(self, level))
        } else {
            Entry::Disabled
        }
    }

    fn fatal(&self) -> Entry<'_, Self> {
        self.entry(Level::Fatal)
    }

    fn error(&self) -> Entry<'_, Self> {
        self.entry(Level::Error)
    }

    fn warn(&self) -> Entry<'_, Self> {
        self.entry(Level::Warn)
    }

    fn info(&self) -> Entry<'_, Self> {
        self.entry(Level::Info)
    }

    fn debug(&self) -> Entry<'_, Self> {
        self.entry(Level::Debug)
    }

    fn trace(&self) -> Entry<'_, Self> {
        self.entry(Level::Trace)
    }
}

impl<S: Sink + ?Sized> SinkExt for S {}
