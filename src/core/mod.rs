//! Core logger types and traits

pub mod context;
pub mod error;
pub mod formatter;
pub mod handler;
pub mod lazy;
pub mod log_level;
pub mod logger;
pub mod record;
pub mod timestamp;
pub mod value;

pub use context::{extend_context, normalize, ContextArgs, Ctx, Fields, ODD_CONTEXT_MESSAGE};
pub use error::{LoggerError, Result};
pub use formatter::{format_func, FormatFunc, Formatter};
pub use handler::{Handler, HandlerRef};
pub use lazy::Lazy;
pub use log_level::{level_from_string, LogLevel};
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use record::{CallSite, Record, RecordKeyNames, ERROR_KEY, LEVEL_KEY, MESSAGE_KEY, TIME_KEY};
pub use timestamp::TimestampFormat;
pub use value::Value;
