//! Fluent entry builder
//!
//! Accumulates one entry and hands it to its sink on `commit`.
//!
//! # Example
//!
//! ```
//! use chronicle_sinks::{FanoutSink, SinkExt};
//!
//! let sink = FanoutSink::new();
//! sink.info()
//!     .message("Game initialization started")
//!     .property("levelId", "level_001")
//!     .commit();
//! ```

use std::fmt;

use chronicle_core::{Level, Properties};
use serde::Serialize;
use serde_json::Value;

use crate::sink::Sink;

/// Accumulator for one enabled entry
///
/// The message and each property follow last-write-wins. `commit` consumes
/// the builder, so an entry is delivered at most once.
pub struct EntryBuilder<'a, S: ?Sized> {
    sink: &'a S,
    level: Level,
    message: String,
    properties: Properties,
}

impl<'a, S: Sink + ?Sized> EntryBuilder<'a, S> {
    pub(crate) fn new(sink: &'a S, level: Level) -> Self {
        Self {
            sink,
            level,
            message: String::new(),
            properties: Properties::new(),
        }
    }

    /// Set the message, replacing any earlier one
    #[inline]
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set a property, replacing an earlier value for the same key
    ///
    /// A value that cannot be converted to JSON is stored as the error text.
    #[must_use]
    pub fn property(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "property value not serializable, storing error text");
            Value::String(e.to_string())
        });
        self.properties.insert(key.into(), value);
        self
    }

    /// Set a property from its `Display` text
    #[must_use]
    pub fn property_display(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.properties
            .insert(key.into(), Value::String(value.to_string()));
        self
    }

    /// Set several properties at once
    #[must_use]
    pub fn properties<K, V>(self, properties: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Serialize,
    {
        properties
            .into_iter()
            .fold(self, |builder, (key, value)| builder.property(key, value))
    }

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    #[inline]
    pub fn current_message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn current_properties(&self) -> &Properties {
        &self.properties
    }

    /// Deliver the entry to the sink
    pub fn commit(self) {
        self.sink.log(self.level, &self.message, &self.properties);
    }
}

impl<S: ?Sized> fmt::Debug for EntryBuilder<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryBuilder")
            .field("level", &self.level)
            .field("message", &self.message)
            .field("properties", &self.properties)
            .finish_non_exhaustive()
    }
}

/// Result of an entry factory: enabled builder or explicit `Disabled`
///
/// Chaining on `Disabled` does nothing and `commit` is a no-op, so call sites
/// can stay fluent without checking. Match on the variant to skip expensive
/// property computation.
pub enum Entry<'a, S: ?Sized> {
    Enabled(EntryBuilder<'a, S>),
    Disabled,
}

impl<S: ?Sized> fmt::Debug for Entry<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled(builder) => f.debug_tuple("Enabled").field(builder).finish(),
            Self::Disabled => f.write_str("Disabled"),
        }
    }
}

impl<'a, S: Sink + ?Sized> Entry<'a, S> {
    #[inline]
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// Level of an enabled entry
    #[inline]
    pub fn level(&self) -> Option<Level> {
        match self {
            Self::Enabled(builder) => Some(builder.level()),
            Self::Disabled => None,
        }
    }

    /// The builder, if enabled
    pub fn into_builder(self) -> Option<EntryBuilder<'a, S>> {
        match self {
            Self::Enabled(builder) => Some(builder),
            Self::Disabled => None,
        }
    }

    #[must_use]
    pub fn message(self, message: impl Into<String>) -> Self {
        self.map(|builder| builder.message(message))
    }

    #[must_use]
    pub fn property(self, key: impl Into<String>, value: impl Serialize) -> Self {
        self.map(|builder| builder.property(key, value))
    }

    #[must_use]
    pub fn property_display(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.map(|builder| builder.property_display(key, value))
    }

    #[must_use]
    pub fn properties<K, V>(self, properties: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Serialize,
    {
        self.map(|builder| builder.properties(properties))
    }

    /// Deliver the entry; no-op when disabled
    pub fn commit(self) {
        if let Self::Enabled(builder) = self {
            builder.commit();
        }
    }

    fn map(self, f: impl FnOnce(EntryBuilder<'a, S>) -> EntryBuilder<'a, S>) -> Self {
        match self {
            Self::Enabled(builder) => Self::Enabled(f(builder)),
            Self::Disabled => Self::Disabled,
        }
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
