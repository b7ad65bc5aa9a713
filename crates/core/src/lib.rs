//! Chronicle - Core
//!
//! The pieces every sink and builder shares: severity levels, the log entry
//! view handed to formatters, and the swappable context that carries the
//! minimum level, formatter and serializer.
//!
//! # Context
//!
//! The context is not ambient state. A [`ContextHandle`] is created once and
//! passed to every sink; sinks read it at log time, so changing the minimum
//! level or the formatter takes effect on the next call without rebuilding
//! anything.
//!
//! ```
//! use chronicle_core::{ContextHandle, Level};
//!
//! let context = ContextHandle::new();
//! assert_eq!(context.minimum_level(), Level::Info);
//!
//! context.set_minimum_level(Level::Debug);
//! assert!(Level::Debug.is_enabled_for(context.minimum_level()));
//! ```

mod context;
mod entry;
mod error;
mod format;
mod level;
mod serialize;

pub use context::{Context, ContextHandle};
pub use entry::{LogEntry, Properties};
pub use error::{Error, Result};
pub use format::{DefaultFormatter, LogFormatter, TIMESTAMP_FORMAT};
pub use level::Level;
pub use serialize::{JsonSerializer, PropertySerializer};
