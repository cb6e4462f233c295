//! Process-wide default logger
//!
//! The root logger is built on first use, never before `main`. Its output
//! format depends on where stdout goes: an interactive terminal gets the
//! human-oriented format, anything else gets logfmt.
//!
//! The free functions below delegate to the root logger and keep call-site
//! capture pointing at the caller.

use crate::core::{ContextArgs, HandlerRef, LogLevel, Logger, LoggerError, Result, Value};
use crate::formatters::LogfmtFormat;
use crate::handlers::stream_handler;
use std::io;
#[cfg(feature = "console")]
use std::io::IsTerminal;
use std::sync::OnceLock;

static ROOT: OnceLock<Logger> = OnceLock::new();

/// Handler writing to stdout, formatted for whatever stdout is attached to
pub fn stdout_handler() -> HandlerRef {
    #[cfg(feature = "console")]
    {
        if io::stdout().is_terminal() {
            return stream_handler(io::stdout(), crate::formatters::TerminalFormat::new());
        }
    }
    stream_handler(io::stdout(), LogfmtFormat::new())
}

/// Handler writing to stderr, formatted for whatever stderr is attached to
pub fn stderr_handler() -> HandlerRef {
    #[cfg(feature = "console")]
    {
        if io::stderr().is_terminal() {
            return stream_handler(io::stderr(), crate::formatters::TerminalFormat::new());
        }
    }
    stream_handler(io::stderr(), LogfmtFormat::new())
}

impl Logger {
    /// Logger with an empty context writing to [`stdout_handler`]
    #[must_use]
    pub fn stdout() -> Self {
        Logger::new(stdout_handler())
    }
}

/// The root logger, created with [`Logger::stdout`] on first use
pub fn root() -> &'static Logger {
    ROOT.get_or_init(Logger::stdout)
}

/// Install `logger` as the root logger
///
/// Fails if the root logger was already used or installed. To redirect a
/// root logger that is already in use, call `root().set_handler(..)`.
pub fn set_root(logger: Logger) -> Result<()> {
    ROOT.set(logger).map_err(|_| LoggerError::RootAlreadyInitialized)
}

/// Derive a logger from the root logger with extra context
#[must_use]
pub fn new(ctx: impl Into<ContextArgs>) -> Logger {
    root().child(ctx)
}

/// Attach a field to the root logger's next record
pub fn with_field(key: impl Into<String>, value: impl Into<Value>) -> &'static Logger {
    root().with_field(key, value)
}

/// Attach several fields to the root logger's next record
pub fn with_fields<I, K, V>(fields: I) -> &'static Logger
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    root().with_fields(fields)
}

#[track_caller]
pub fn log(level: LogLevel, message: impl Into<String>, ctx: impl Into<ContextArgs>) {
    root().log(level, message, ctx);
}

#[track_caller]
pub fn trace(message: impl Into<String>) {
    root().trace(message);
}

#[track_caller]
pub fn debug(message: impl Into<String>) {
    root().debug(message);
}

#[track_caller]
pub fn info(message: impl Into<String>) {
    root().info(message);
}

#[track_caller]
pub fn warn(message: impl Into<String>) {
    root().warn(message);
}

#[track_caller]
pub fn error(message: impl Into<String>) {
    root().error(message);
}

/// Log at fatal level on the root logger, then exit the process
#[track_caller]
pub fn fatal(message: impl Into<String>) {
    root().fatal(message);
}

#[track_caller]
pub fn trace_with_context(message: impl Into<String>, ctx: impl Into<ContextArgs>) {
    root().trace_with_context(message, ctx);
}

#[track_caller]
pub fn debug_with_context(message: impl Into<String>, ctx: impl Into<ContextArgs>) {
    root().debug_with_context(message, ctx);
}

#[track_caller]
pub fn info_with_context(message: impl Into<String>, ctx: impl Into<ContextArgs>) {
    root().info_with_context(message, ctx);
}

#[track_caller]
pub fn warn_with_context(message: impl Into<String>, ctx: impl Into<ContextArgs>) {
    root().warn_with_context(message, ctx);
}

#[track_caller]
pub fn error_with_context(message: impl Into<String>, ctx: impl Into<ContextArgs>) {
    root().error_with_context(message, ctx);
}

/// Log at fatal level with context on the root logger, then exit the process
#[track_caller]
pub fn fatal_with_context(message: impl Into<String>, ctx: impl Into<ContextArgs>) {
    root().fatal_with_context(message, ctx);
}
