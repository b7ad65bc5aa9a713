//! Building sinks from configuration
//!
//! ```ignore
//! let config = Config::from_file("chronicle.toml")?;
//! let context = context_from_config(&config.log);
//! let sink = FanoutSink::from_config(&config, context.clone())?;
//!
//! sink.info().message("ready").commit();
//! ```

use std::sync::Arc;

use chronicle_config::{Config, FileSinkConfig, LogConfig};
use chronicle_core::{Context, ContextHandle};

use crate::common::Result;
use crate::fanout::FanoutSink;
use crate::file::{FileSink, FileSinkOptions};

/// Seed a fresh context from the `[log]` section
pub fn context_from_config(config: &LogConfig) -> ContextHandle {
    ContextHandle::from_context(Context::default().with_minimum_level(config.minimum_level))
}

impl From<&FileSinkConfig> for FileSinkOptions {
    fn from(config: &FileSinkConfig) -> Self {
        Self {
            buffer_size: config.buffer_size,
            auto_flush: config.auto_flush,
            max_file_size: config.max_file_size,
            max_rolling_files: config.rolling_files(),
        }
    }
}

impl FileSink {
    /// Open the file sink described by `[sinks.<name>]`
    ///
    /// # Errors
    ///
    /// Returns the construction error of [`FileSink::with_options`].
    pub fn from_config(
        name: &str,
        config: &FileSinkConfig,
        context: ContextHandle,
    ) -> Result<Self> {
        let sink = Self::with_options(&config.path, config.into(), context)?;
        Ok(sink.named(name))
    }
}

impl FanoutSink {
    /// Open every enabled file sink in `config`, in name order, behind one fanout
    ///
    /// # Errors
    ///
    /// Returns the first sink construction error; sinks opened before it are
    /// closed.
    pub fn from_config(config: &Config, context: ContextHandle) -> Result<Self> {
        let fanout = Self::new();

        for (name, sink_config) in config.sinks.enabled() {
            let sink = FileSink::from_config(name, sink_config, context.clone())?;
            fanout.add_sink(Arc::new(sink));
        }

        tracing::debug!(sinks = fanout.len(), "fanout built from config");
        Ok(fanout)
    }
}
