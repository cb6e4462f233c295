//! Error types for the logger system

use super::log_level::LogLevel;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Sink write error, passed through unmodified
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Level name that does not match any known level
    ///
    /// Carries the level callers should fall back to if they choose to
    /// ignore the error.
    #[error("unknown level: {name}")]
    UnknownLevel { name: String, fallback: LogLevel },

    /// A lazy value failed to produce a result
    #[error("bad lazy: {0}")]
    BadLazy(String),

    /// The root logger was already in use when a replacement was injected
    #[error("root logger already initialized")]
    RootAlreadyInitialized,

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an unknown level error falling back to `Debug`
    pub fn unknown_level(name: impl Into<String>) -> Self {
        LoggerError::UnknownLevel {
            name: name.into(),
            fallback: LogLevel::Debug,
        }
    }

    /// Create a bad lazy error
    pub fn bad_lazy(msg: impl Into<String>) -> Self {
        LoggerError::BadLazy(msg.into())
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// The level to use in place of a failed parse, if this is a parse error
    #[must_use]
    pub fn fallback_level(&self) -> Option<LogLevel> {
        match self {
            LoggerError::UnknownLevel { fallback, .. } => Some(*fallback),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::unknown_level("verbose");
        assert!(matches!(err, LoggerError::UnknownLevel { .. }));

        let err = LoggerError::bad_lazy("callable panicked");
        assert!(matches!(err, LoggerError::BadLazy(_)));

        let err = LoggerError::writer("sink closed");
        assert!(matches!(err, LoggerError::WriterError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::unknown_level("verbose");
        assert_eq!(err.to_string(), "unknown level: verbose");

        let err = LoggerError::bad_lazy("division by zero");
        assert_eq!(err.to_string(), "bad lazy: division by zero");

        assert_eq!(
            LoggerError::RootAlreadyInitialized.to_string(),
            "root logger already initialized"
        );
    }

    #[test]
    fn test_fallback_level() {
        assert_eq!(
            LoggerError::unknown_level("nope").fallback_level(),
            Some(LogLevel::Debug)
        );
        assert_eq!(LoggerError::other("x").fallback_level(), None);
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open /var/log/app.log", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot open"));
    }
}
