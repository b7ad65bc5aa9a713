//! Shared logging context
//!
//! A [`Context`] is an immutable snapshot of the minimum level, serializer
//! and formatter. A [`ContextHandle`] is the shared cell sinks hold on to.
//!
//! # Design
//!
//! - **ArcSwap**: readers take a lock-free snapshot on every log call
//! - **Wholesale replacement**: `replace` swaps the whole snapshot at once
//! - **Last writer wins**: concurrent replacement is not coordinated
//!
//! ```text
//! [Sink::log()] → [ContextHandle::current()] → Arc<Context> (snapshot)
//!                        ↑
//! [replace() / set_minimum_level()] → ArcSwap::store / rcu
//! ```

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::error::{Error, Result};
use crate::format::{DefaultFormatter, LogFormatter};
use crate::level::Level;
use crate::serialize::{JsonSerializer, PropertySerializer};

/// Snapshot of process-wide logging settings
#[derive(Clone)]
pub struct Context {
    /// Entries below this level are suppressed
    pub minimum_level: Level,

    /// Renders entry properties
    pub serializer: Arc<dyn PropertySerializer>,

    /// Renders whole entries
    pub formatter: Arc<dyn LogFormatter>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            minimum_level: Level::Info,
            serializer: Arc::new(JsonSerializer),
            formatter: Arc::new(DefaultFormatter),
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("minimum_level", &self.minimum_level)
            .finish_non_exhaustive()
    }
}

impl Context {
    #[must_use]
    pub fn with_minimum_level(mut self, level: Level) -> Self {
        self.minimum_level = level;
        self
    }

    #[must_use]
    pub fn with_serializer(mut self, serializer: Arc<dyn PropertySerializer>) -> Self {
        self.serializer = serializer;
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Arc<dyn LogFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Whether an entry at `level` passes this context's threshold
    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        level.is_enabled_for(self.minimum_level)
    }
}

/// Shared, atomically swappable context cell
///
/// Cloning the handle shares the cell; every clone observes replacements.
#[derive(Clone, Default)]
pub struct ContextHandle {
    inner: Arc<ArcSwap<Context>>,
}

impl fmt::Debug for ContextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContextHandle").field(&*self.current()).finish()
    }
}

impl ContextHandle {
    /// Create a handle holding the default context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle holding `context`
    pub fn from_context(context: Context) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(context)),
        }
    }

    /// Snapshot of the current context
    #[inline]
    pub fn current(&self) -> Arc<Context> {
        self.inner.load_full()
    }

    /// Current minimum level
    #[inline]
    pub fn minimum_level(&self) -> Level {
        self.inner.load().minimum_level
    }

    /// Whether an entry at `level` passes the current threshold
    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        self.inner.load().is_enabled(level)
    }

    /// Replace the whole context
    pub fn replace(&self, context: Context) {
        self.inner.store(Arc::new(context));
    }

    /// Replace the whole context from an optional value
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` when `context` is `None`; the current
    /// context is left untouched.
    pub fn try_replace(&self, context: Option<Context>) -> Result<()> {
        let context =
            context.ok_or_else(|| Error::invalid_argument("context", "context is absent"))?;
        self.replace(context);
        Ok(())
    }

    /// Swap in a fresh default context
    pub fn reset(&self) {
        self.replace(Context::default());
    }

    /// Change only the minimum level
    pub fn set_minimum_level(&self, level: Level) {
        self.update(|ctx| ctx.minimum_level = level);
    }

    /// Change only the formatter
    pub fn set_formatter(&self, formatter: Arc<dyn LogFormatter>) {
        self.update(|ctx| ctx.formatter = Arc::clone(&formatter));
    }

    /// Change only the serializer
    pub fn set_serializer(&self, serializer: Arc<dyn PropertySerializer>) {
        self.update(|ctx| ctx.serializer = Arc::clone(&serializer));
    }

    /// Read-copy-update of the current context
    ///
    /// `f` may run more than once if another writer races.
    pub fn update(&self, f: impl Fn(&mut Context)) {
        self.inner.rcu(|current| {
            let mut next = Context::clone(current);
            f(&mut next);
            next
        });
    }
}

impl From<Context> for ContextHandle {
    fn from(context: Context) -> Self {
        Self::from_context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{LogEntry, Properties};

    struct Fixed(&'static str);

    impl LogFormatter for Fixed {
        fn format(&self, _entry: &LogEntry<'_>, _serializer: &dyn PropertySerializer) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_default_context() {
        let ctx = Context::default();
        assert_eq!(ctx.minimum_level, Level::Info);
        assert!(ctx.is_enabled(Level::Info));
        assert!(!ctx.is_enabled(Level::Debug));
    }

    #[test]
    fn test_clones_share_the_cell() {
        let a = ContextHandle::new();
        let b = a.clone();

        a.set_minimum_level(Level::Error);
        assert_eq!(b.minimum_level(), Level::Error);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let handle = ContextHandle::new();
        handle.replace(
            Context::default()
                .with_minimum_level(Level::Trace)
                .with_formatter(Arc::new(Fixed("fixed"))),
        );

        let ctx = handle.current();
        assert_eq!(ctx.minimum_level, Level::Trace);

        let props = Properties::new();
        let entry = LogEntry::now(Level::Info, "m", &props);
        assert_eq!(ctx.formatter.format(&entry, ctx.serializer.as_ref()), "fixed");
    }

    #[test]
    fn test_try_replace_rejects_absent() {
        let handle = ContextHandle::new();
        handle.set_minimum_level(Level::Warn);

        let err = handle.try_replace(None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { argument: "context", .. }));
        assert_eq!(handle.minimum_level(), Level::Warn);

        handle
            .try_replace(Some(Context::default().with_minimum_level(Level::Debug)))
            .unwrap();
        assert_eq!(handle.minimum_level(), Level::Debug);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let handle = ContextHandle::from_context(Context::default().with_minimum_level(Level::Off));
        assert_eq!(handle.minimum_level(), Level::Off);

        handle.reset();
        assert_eq!(handle.minimum_level(), Level::Info);
    }

    #[test]
    fn test_snapshot_is_stable_across_replacement() {
        let handle = ContextHandle::new();
        let before = handle.current();

        handle.set_minimum_level(Level::Fatal);

        assert_eq!(before.minimum_level, Level::Info);
        assert_eq!(handle.current().minimum_level, Level::Fatal);
    }

    #[test]
    fn test_set_formatter_keeps_level() {
        let handle = ContextHandle::new();
        handle.set_minimum_level(Level::Debug);
        handle.set_formatter(Arc::new(Fixed("x")));

        assert_eq!(handle.minimum_level(), Level::Debug);
    }

    #[test]
    fn test_concurrent_updates_do_not_lose_fields() {
        let handle = ContextHandle::new();

        std::thread::scope(|s| {
            s.spawn(|| {
                for _ in 0..100 {
                    handle.set_minimum_level(Level::Warn);
                }
            });
            s.spawn(|| {
                for _ in 0..100 {
                    handle.set_serializer(Arc::new(crate::JsonSerializer));
                }
            });
        });

        assert_eq!(handle.minimum_level(), Level::Warn);
    }
}
