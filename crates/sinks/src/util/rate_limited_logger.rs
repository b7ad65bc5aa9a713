//! Rate-limited diagnostic reporting
//!
//! Sink write failures tend to repeat (a full disk fails every write), so the
//! diagnostic channel logs at most once per interval and carries the number
//! of failures suppressed since the last report.
//!
//! # Example
//!
//! ```ignore
//! let logger = RateLimitedLogger::new(Duration::from_secs(10));
//!
//! // Only the first of these reaches tracing
//! for _ in 0..1000 {
//!     logger.report("game", &err);
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::common::SinkError;

/// Default interval between reports
pub const DEFAULT_LOG_INTERVAL: Duration = Duration::from_secs(10);

/// Reports sink failures through `tracing::error!`, at most once per interval
///
/// Thread-safe: counters are atomic and the last report time sits behind a
/// mutex.
#[derive(Debug)]
pub struct RateLimitedLogger {
    min_interval: Duration,
    last_log_time: Mutex<Option<Instant>>,

    /// Failures since the last report
    error_count: AtomicU64,

    /// Failures ever recorded
    total_errors: AtomicU64,
}

impl RateLimitedLogger {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_log_time: Mutex::new(None),
            error_count: AtomicU64::new(0),
            total_errors: AtomicU64::new(0),
        }
    }

    /// Record a failure of `sink` and report it if the interval has elapsed
    ///
    /// Returns true if the failure was reported, false if it was suppressed.
    pub fn report(&self, sink: &str, error: &SinkError) -> bool {
        self.error_count.fetch_add(1, Ordering::Relaxed);
        let total = self.total_errors.fetch_add(1, Ordering::Relaxed) + 1;

        if !self.should_log() {
            return false;
        }

        let count = self.error_count.swap(0, Ordering::Relaxed);
        let cause = std::error::Error::source(error)
            .map(ToString::to_string)
            .unwrap_or_default();

        if count > 1 {
            tracing::error!(
                sink = %sink,
                error = %error,
                cause = %cause,
                suppressed_count = count - 1,
                total_errors = total,
                "sink write failed (rate-limited)"
            );
        } else {
            tracing::error!(
                sink = %sink,
                error = %error,
                cause = %cause,
                total_errors = total,
                "sink write failed"
            );
        }
        true
    }

    fn should_log(&self) -> bool {
        let mut last_time = self.last_log_time.lock();
        let now = Instant::now();

        match *last_time {
            Some(last) if now.duration_since(last) < self.min_interval => false,
            _ => {
                *last_time = Some(now);
                true
            }
        }
    }

    /// Failures recorded since the last report
    pub fn pending_error_count(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    pub fn total_error_count(&self) -> u64 {
        self.total_errors.load(Ordering::Relaxed)
    }
}

impl Default for RateLimitedLogger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_INTERVAL)
    }
}
