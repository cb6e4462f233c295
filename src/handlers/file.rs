//! File-backed handler

use crate::core::{Formatter, HandlerRef, LoggerError, Result};
use crate::handlers::stream_handler;
use std::fs::OpenOptions;
use std::io::BufWriter;
use std::path::Path;

/// Handler appending formatted records to the file at `path`
///
/// The file is created with mode 0644 if missing. The returned handler
/// resolves lazy values and serializes writes; each record is flushed
/// before the call returns.
///
/// # Examples
///
/// ```no_run
/// use rust_structured_logger::handlers::file_handler;
/// use rust_structured_logger::formatters::LogfmtFormat;
///
/// let handler = file_handler("/var/log/app.log", LogfmtFormat::new()).unwrap();
/// ```
pub fn file_handler<F>(path: impl AsRef<Path>, format: F) -> Result<HandlerRef>
where
    F: Formatter + 'static,
{
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let file = options.open(path).map_err(|e| {
        LoggerError::io_operation(
            "opening log file",
            format!("cannot open '{}'", path.display()),
            e,
        )
    })?;
    Ok(stream_handler(BufWriter::new(file), format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{format_func, LogLevel, Record};
    use tempfile::TempDir;

    fn line_format() -> impl Formatter {
        format_func(|r: &Record| format!("{} {}\n", r.level, r.message).into_bytes())
    }

    #[test]
    fn test_appends_to_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("app.log");
        std::fs::write(&path, "existing\n").unwrap();

        let handler = file_handler(&path, line_format()).unwrap();
        let mut record = Record::new(LogLevel::Warn, "appended", Vec::new());
        handler.log(&mut record).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "existing\nwarn appended\n");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("app.log");

        let err = file_handler(&path, line_format()).err().expect("open should fail");
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_created_with_0644() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("fresh.log");
        let _handler = file_handler(&path, line_format()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        // the process umask can only clear bits
        assert_eq!(mode & 0o777 & !0o644, 0);
    }
}
