//! Test doubles shared by the sink tests

use std::sync::atomic::{AtomicUsize, Ordering};

use chronicle_core::{ContextHandle, Level, Properties};
use parking_lot::Mutex;

use crate::sink::Sink;

/// A captured entry
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub level: Level,
    pub message: String,
    pub properties: Properties,
}

/// In-memory sink that records every entry it is handed
///
/// Gates against a context when given one, otherwise accepts everything.
pub struct MemorySink {
    name: String,
    context: Option<ContextHandle>,
    entries: Mutex<Vec<Recorded>>,
    closes: AtomicUsize,
}

impl MemorySink {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            context: None,
            entries: Mutex::new(Vec::new()),
            closes: AtomicUsize::new(0),
        }
    }

    pub fn gated(name: &str, context: ContextHandle) -> Self {
        Self {
            context: Some(context),
            ..Self::new(name)
        }
    }

    pub fn entries(&self) -> Vec<Recorded> {
        self.entries.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries.lock().iter().map(|e| e.message.clone()).collect()
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl Sink for MemorySink {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, level: Level, message: &str, properties: &Properties) {
        if let Some(ref context) = self.context
            && !context.is_enabled(level)
        {
            return;
        }

        self.entries.lock().push(Recorded {
            level,
            message: message.to_string(),
            properties: properties.clone(),
        });
    }

    fn accepts(&self, level: Level) -> bool {
        self.context
            .as_ref()
            .is_none_or(|context| context.is_enabled(level))
    }

    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}
