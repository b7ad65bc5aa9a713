//! Sink utilities for file I/O
//!
//! - **buffered_file**: append-only buffered handle to the active file
//! - **rolling**: rolled file naming and the shift-on-rotate algorithm
//! - **rate_limited_logger**: diagnostic channel for absorbed write failures

pub mod buffered_file;
pub mod rate_limited_logger;
pub mod rolling;

pub use buffered_file::BufferedFile;
pub use rate_limited_logger::{DEFAULT_LOG_INTERVAL, RateLimitedLogger};
pub use rolling::{rolled_path, shift_files};
