//! # Rust Structured Logger
//!
//! A structured key/value logging core: leveled records with an ordered
//! context flow through a chain of composable handlers that can be swapped
//! while the program runs.
//!
//! ## Features
//!
//! - **Composable handlers**: lazy resolution, synchronized writers, fan-out, filters
//! - **Live reconfiguration**: each logger's handler slot is replaced atomically
//! - **Lazy values**: expensive context is computed only when a record is written
//! - **Formats**: logfmt, column-aligned terminal output and JSON
//!
//! ## Example
//!
//! ```
//! use rust_structured_logger::prelude::*;
//!
//! let logger = Logger::new(stream_handler(std::io::stderr(), LogfmtFormat::new()));
//! let db = logger.child(["component", "db"]);
//! db.info_with_context("connected", ["pool_size", "8"]);
//! ```

pub mod core;
pub mod formatters;
pub mod handlers;
pub mod macros;
pub mod root;

pub mod prelude {
    pub use crate::core::{
        level_from_string, CallSite, ContextArgs, Ctx, Formatter, Handler, HandlerRef, Lazy,
        LogLevel, Logger, LoggerBuilder, LoggerError, Record, RecordKeyNames, Result,
        TimestampFormat, Value,
    };
    pub use crate::formatters::{JsonFormat, LogfmtFormat};
    #[cfg(feature = "console")]
    pub use crate::formatters::TerminalFormat;
    #[cfg(feature = "file")]
    pub use crate::handlers::file_handler;
    pub use crate::handlers::{
        caller_handler, discard_handler, func_handler, lazy_handler, level_filter_handler,
        multi_handler, stream_handler, sync_handler, SwapHandler,
    };
    pub use crate::root::{root, stderr_handler, stdout_handler};
}

pub use crate::core::{
    format_func, level_from_string, CallSite, ContextArgs, Ctx, Fields, FormatFunc, Formatter,
    Handler, HandlerRef, Lazy, LogLevel, Logger, LoggerBuilder, LoggerError, Record,
    RecordKeyNames, Result, TimestampFormat, Value, ERROR_KEY, LEVEL_KEY, MESSAGE_KEY, TIME_KEY,
};
pub use crate::root::{root, set_root};
