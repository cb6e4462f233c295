//! Formatting writer and the standard stream composition

use crate::core::{Formatter, Handler, HandlerRef, Record, Result};
use crate::handlers::{LazyHandler, SyncHandler};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Terminal handler: formats a record and writes the bytes to a sink
///
/// Write errors are returned as [`crate::LoggerError::IoError`] carrying the
/// sink's error unchanged.
pub struct WriterHandler<W, F> {
    writer: Mutex<W>,
    format: F,
}

impl<W, F> WriterHandler<W, F>
where
    W: Write + Send,
    F: Formatter,
{
    pub fn new(writer: W, format: F) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    /// Recover the sink
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W, F> Handler for WriterHandler<W, F>
where
    W: Write + Send,
    F: Formatter,
{
    fn log(&self, record: &mut Record) -> Result<()> {
        let bytes = self.format.format(record);
        let mut writer = self.writer.lock();
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }
}

/// Standard sink-backed composition: resolve lazies, lock, format and write
pub type StreamHandler<W, F> = LazyHandler<SyncHandler<WriterHandler<W, F>>>;

/// Build a [`StreamHandler`] writing to `writer`
pub fn stream<W, F>(writer: W, format: F) -> StreamHandler<W, F>
where
    W: Write + Send,
    F: Formatter,
{
    LazyHandler::new(SyncHandler::new(WriterHandler::new(writer, format)))
}

/// Shared [`StreamHandler`] writing to `writer`
///
/// # Example
///
/// ```
/// use rust_structured_logger::handlers::stream_handler;
/// use rust_structured_logger::formatters::LogfmtFormat;
///
/// let handler = stream_handler(std::io::stderr(), LogfmtFormat::new());
/// ```
pub fn stream_handler<W, F>(writer: W, format: F) -> HandlerRef
where
    W: Write + Send + 'static,
    F: Formatter + 'static,
{
    Arc::new(stream(writer, format))
}
