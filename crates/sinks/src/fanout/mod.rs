//! Fanout Sink - broadcast to every member sink
//!
//! Holds an ordered list of `Arc<dyn Sink>` and hands each entry to all of
//! them in registration order. Members apply their own level gates; the
//! fanout itself accepts everything.
//!
//! # Design
//!
//! - **Snapshot on read**: `log` iterates an immutable `Arc<Vec<_>>` loaded
//!   from an `ArcSwap`, so add/remove never race with a broadcast in progress
//! - **Read-copy-update**: `add_sink` and `remove_sink` publish a new list
//! - **Nesting**: a fanout is itself a `Sink` and can be a member
//!
//! ```text
//! [log()] → load snapshot → [member 0].log() → [member 1].log() → ...
//!               ↑
//! [add_sink / remove_sink] → ArcSwap::rcu
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use arc_swap::ArcSwap;
use chronicle_core::{Level, Properties};

use crate::sink::Sink;

/// Default fanout name for diagnostics
const DEFAULT_NAME: &str = "fanout";

/// Sink broadcasting each entry to an ordered set of member sinks
pub struct FanoutSink {
    name: String,
    sinks: ArcSwap<Vec<Arc<dyn Sink>>>,
    closed: AtomicBool,
}

impl FanoutSink {
    /// Create an empty fanout
    pub fn new() -> Self {
        Self::with_name(DEFAULT_NAME)
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sinks: ArcSwap::from_pointee(Vec::new()),
            closed: AtomicBool::new(false),
        }
    }

    /// Create a fanout over `sinks`, in order
    pub fn from_sinks(sinks: impl IntoIterator<Item = Arc<dyn Sink>>) -> Self {
        let fanout = Self::new();
        fanout.sinks.store(Arc::new(sinks.into_iter().collect()));
        fanout
    }

    /// Append a member
    ///
    /// Ignored once the fanout is closed.
    pub fn add_sink(&self, sink: Arc<dyn Sink>) {
        if self.closed.load(Ordering::Acquire) {
            tracing::debug!(
                fanout = %self.name,
                sink = %sink.name(),
                "fanout closed, sink not added"
            );
            return;
        }

        self.sinks.rcu(|current| {
            let mut next = Vec::clone(current);
            next.push(Arc::clone(&sink));
            next
        });

        tracing::debug!(fanout = %self.name, sink = %sink.name(), "added sink to fanout");
    }

    /// Remove a member by identity
    ///
    /// Returns false if `sink` was not a member.
    pub fn remove_sink<S: Sink + ?Sized>(&self, sink: &Arc<S>) -> bool {
        let target = Arc::as_ptr(sink);
        let is_target = |member: &Arc<dyn Sink>| std::ptr::addr_eq(Arc::as_ptr(member), target);

        let previous = self.sinks.rcu(|current| {
            current
                .iter()
                .filter(|&member| !is_target(member))
                .cloned()
                .collect::<Vec<_>>()
        });

        let removed = previous.iter().any(is_target);
        if removed {
            tracing::debug!(fanout = %self.name, sink = %sink.name(), "removed sink from fanout");
        }
        removed
    }

    /// Current members, in broadcast order
    pub fn sinks(&self) -> Arc<Vec<Arc<dyn Sink>>> {
        self.sinks.load_full()
    }

    pub fn len(&self) -> usize {
        self.sinks.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.load().is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl Default for FanoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for FanoutSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, level: Level, message: &str, properties: &Properties) {
        let sinks = self.sinks.load();
        for sink in sinks.iter() {
            sink.log(level, message, properties);
        }
    }

    /// Always true: members gate for themselves
    fn accepts(&self, _level: Level) -> bool {
        true
    }

    fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        let sinks = self.sinks.swap(Arc::new(Vec::new()));
        for sink in sinks.iter() {
            sink.close();
        }

        tracing::debug!(fanout = %self.name, closed_sinks = sinks.len(), "fanout closed");
    }
}

impl fmt::Debug for FanoutSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sinks = self.sinks.load();
        let names: Vec<&str> = sinks.iter().map(|s| s.name()).collect();
        f.debug_struct("FanoutSink")
            .field("name", &self.name)
            .field("sinks", &names)
            .field("closed", &self.is_closed())
            .finish()
    }
}
