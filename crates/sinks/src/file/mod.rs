//! File Sink - size-rotated, human-readable log file
//!
//! Appends one formatted line per entry to a single active file and rolls it
//! once it grows past a size threshold.
//!
//! # Write path
//!
//! Each `log` call runs under one per-instance lock:
//!
//! ```text
//! [gate on context] → lock → [format] → [append + '\n'] → [flush?]
//!                                  → [size > max?] → [rotate + reopen] → unlock
//! ```
//!
//! Formatting happens inside the lock with a timestamp taken there, so lines
//! land in the file in timestamp order.
//!
//! # On-disk layout
//!
//! ```text
//! logs/
//! ├── game.log     # active
//! ├── game.log.1   # most recent roll
//! ├── game.log.2
//! └── game.log.5   # oldest kept (max_rolling_files = 5)
//! ```
//!
//! # Failures
//!
//! Construction failures are returned. Write, flush and rotation failures at
//! log time are counted, reported through a rate-limited `tracing::error!`
//! and swallowed; the caller never sees them.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chronicle_core::{ContextHandle, Level, LogEntry, LogFormatter, Properties};
use parking_lot::Mutex;

use crate::common::{Result, SinkError, SinkMetrics};
use crate::sink::Sink;
use crate::util::{BufferedFile, RateLimitedLogger, rolled_path, shift_files};

/// Default write buffer size (4 KiB)
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Default rotation threshold (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default number of rolled files kept
pub const DEFAULT_MAX_ROLLING_FILES: u32 = 5;

/// Options for a file sink, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSinkOptions {
    /// Write buffer size in bytes
    pub buffer_size: usize,

    /// Flush to the OS after every line
    pub auto_flush: bool,

    /// Roll once the active file exceeds this many bytes (0 disables)
    pub max_file_size: u64,

    /// Rolled files kept (0 disables rotation)
    pub max_rolling_files: u32,
}

impl Default for FileSinkOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            auto_flush: true,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_rolling_files: DEFAULT_MAX_ROLLING_FILES,
        }
    }
}

impl FileSinkOptions {
    #[must_use]
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    #[must_use]
    pub fn with_auto_flush(mut self, auto_flush: bool) -> Self {
        self.auto_flush = auto_flush;
        self
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    #[must_use]
    pub fn with_max_rolling_files(mut self, max_rolling_files: u32) -> Self {
        self.max_rolling_files = max_rolling_files;
        self
    }

    /// Disable size-based rotation; the active file grows unbounded
    #[must_use]
    pub fn without_rotation(self) -> Self {
        self.with_max_file_size(0)
    }

    /// Whether size-based rotation can ever happen
    #[inline]
    pub fn rotation_enabled(&self) -> bool {
        self.max_file_size > 0 && self.max_rolling_files > 0
    }
}

/// Mutable state guarded by the sink lock
#[derive(Debug, Default)]
struct FileState {
    /// Active file; `None` after a failed reopen until the next write
    writer: Option<BufferedFile>,
    closed: bool,
}

/// Sink writing formatted lines to a size-rotated file
///
/// Thread-safe: concurrent `log` calls are serialized by a per-instance
/// mutex, and the append, size check and rotation form one critical section.
pub struct FileSink {
    /// Sink name for diagnostics (defaults to the path)
    name: String,

    path: PathBuf,
    options: FileSinkOptions,

    /// Shared context, read on every entry
    context: ContextHandle,

    /// Fixed formatter overriding the context formatter
    formatter: Option<Arc<dyn LogFormatter>>,

    state: Mutex<FileState>,

    /// Metrics (Arc for sharing with metrics handles)
    metrics: Arc<SinkMetrics>,

    /// Rate-limited reporter for absorbed failures
    error_logger: RateLimitedLogger,
}

impl FileSink {
    /// Open a file sink with default options
    ///
    /// # Errors
    ///
    /// See [`FileSink::with_options`].
    pub fn new(path: impl AsRef<Path>, context: ContextHandle) -> Result<Self> {
        Self::with_options(path, FileSinkOptions::default(), context)
    }

    /// Open a file sink
    ///
    /// Creates the containing directory if needed and opens the file for
    /// appending.
    ///
    /// # Errors
    ///
    /// - `SinkError::InvalidArgument` if `path` is empty
    /// - `SinkError::CreateDir` if the directory cannot be created
    /// - `SinkError::OpenFile` if the file cannot be opened
    pub fn with_options(
        path: impl AsRef<Path>,
        options: FileSinkOptions,
        context: ContextHandle,
    ) -> Result<Self> {
        Self::open(path.as_ref(), options, context, None)
    }

    /// Open a file sink with a fixed formatter
    ///
    /// `formatter` is used for every entry instead of the context formatter;
    /// the context serializer still applies.
    ///
    /// # Errors
    ///
    /// See [`FileSink::with_options`].
    pub fn with_formatter(
        path: impl AsRef<Path>,
        options: FileSinkOptions,
        context: ContextHandle,
        formatter: Arc<dyn LogFormatter>,
    ) -> Result<Self> {
        Self::open(path.as_ref(), options, context, Some(formatter))
    }

    fn open(
        path: &Path,
        options: FileSinkOptions,
        context: ContextHandle,
        formatter: Option<Arc<dyn LogFormatter>>,
    ) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(
                chronicle_core::Error::invalid_argument("path", "path must not be empty").into(),
            );
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| SinkError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let writer = open_writer(path, options.buffer_size)?;

        tracing::debug!(
            path = %path.display(),
            buffer_size = options.buffer_size,
            auto_flush = options.auto_flush,
            max_file_size = options.max_file_size,
            max_rolling_files = options.max_rolling_files,
            "file sink opened"
        );

        Ok(Self {
            name: path.display().to_string(),
            path: path.to_path_buf(),
            options,
            context,
            formatter,
            state: Mutex::new(FileState {
                writer: Some(writer),
                closed: false,
            }),
            metrics: Arc::new(SinkMetrics::new()),
            error_logger: RateLimitedLogger::default(),
        })
    }

    /// Set the name used in diagnostics
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Path of the active file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &FileSinkOptions {
        &self.options
    }

    /// Path of rolled slot `index` (`{path}.{index}`)
    pub fn rolled_path(&self, index: u32) -> PathBuf {
        rolled_path(&self.path, index)
    }

    pub fn context(&self) -> &ContextHandle {
        &self.context
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    pub fn metrics(&self) -> &SinkMetrics {
        &self.metrics
    }

    /// Shared handle to the metrics, valid after the sink is dropped
    pub fn metrics_handle(&self) -> Arc<SinkMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Push buffered lines to the OS
    ///
    /// # Errors
    ///
    /// Returns `SinkError::Write` if the flush fails.
    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.lock();
        if let Some(writer) = state.writer.as_mut() {
            writer.flush().map_err(|source| self.write_error(source))?;
        }
        Ok(())
    }

    /// Append one formatted line, then roll if the file grew too large
    fn write_locked(&self, state: &mut FileState, line: &str) -> Result<()> {
        let writer = match state.writer.take() {
            Some(writer) => writer,
            None => open_writer(&self.path, self.options.buffer_size)?,
        };
        let writer = state.writer.insert(writer);

        let n = writer
            .write_line(line)
            .map_err(|source| self.write_error(source))?;
        self.metrics.line_written(n as u64);

        if self.options.auto_flush {
            writer.flush().map_err(|source| self.write_error(source))?;
        }

        if self.options.rotation_enabled() {
            let len = writer.file_len().map_err(|source| self.write_error(source))?;
            if len > self.options.max_file_size {
                self.rotate_locked(state)?;
            }
        }

        Ok(())
    }

    /// Close the active file, shift rolled files and reopen a fresh one
    ///
    /// On failure the writer stays `None`; the next write reopens lazily.
    fn rotate_locked(&self, state: &mut FileState) -> Result<()> {
        tracing::debug!(sink = %self.name, path = %self.path.display(), "rotating log file");

        if let Some(writer) = state.writer.take() {
            writer.finish().map_err(|source| self.write_error(source))?;
        }

        shift_files(&self.path, self.options.max_rolling_files).map_err(|source| {
            SinkError::Rotate {
                path: self.path.clone(),
                source,
            }
        })?;
        self.metrics.rotation();

        state.writer = Some(open_writer(&self.path, self.options.buffer_size)?);

        tracing::info!(
            sink = %self.name,
            path = %self.path.display(),
            max_rolling_files = self.options.max_rolling_files,
            "log file rotated"
        );
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn absorb(&self, error: &SinkError) {
        self.metrics.write_error();
        self.error_logger.report(&self.name, error);
    }
}

fn open_writer(path: &Path, buffer_size: usize) -> Result<BufferedFile> {
    BufferedFile::open(path, buffer_size).map_err(|source| SinkError::OpenFile {
        path: path.to_path_buf(),
        source,
    })
}

impl Sink for FileSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, level: Level, message: &str, properties: &Properties) {
        let context = self.context.current();
        if !context.is_enabled(level) {
            return;
        }

        let mut state = self.state.lock();
        if state.closed {
            self.metrics.dropped_closed();
            return;
        }

        let entry = LogEntry::now(level, message, properties);
        let formatter = self.formatter.as_deref().unwrap_or(&*context.formatter);
        let line = formatter.format(&entry, &*context.serializer);

        if let Err(e) = self.write_locked(&mut state, &line) {
            self.absorb(&e);
        }
    }

    fn accepts(&self, level: Level) -> bool {
        self.context.is_enabled(level)
    }

    fn close(&self) {
        let mut state = self.state.lock();
        if state.closed {
            return;
        }
        state.closed = true;

        if let Some(writer) = state.writer.take()
            && let Err(source) = writer.finish()
        {
            self.absorb(&self.write_error(source));
        }

        tracing::debug!(sink = %self.name, path = %self.path.display(), "file sink closed");
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for FileSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSink")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("options", &self.options)
            .field("custom_formatter", &self.formatter.is_some())
            .finish_non_exhaustive()
    }
}
