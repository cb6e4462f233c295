//! Formatter trait for turning records into bytes

use super::record::Record;
use std::sync::Arc;

/// Maps a record to the bytes written to a sink
///
/// Implementations must not keep per-call state: one formatter may be
/// shared by several writers running on different threads.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &Record) -> Vec<u8>;
}

impl<F: Formatter + ?Sized> Formatter for Arc<F> {
    fn format(&self, record: &Record) -> Vec<u8> {
        (**self).format(record)
    }
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn format(&self, record: &Record) -> Vec<u8> {
        (**self).format(record)
    }
}

/// Formatter backed by a plain function
pub struct FormatFunc<F>(F);

impl<F> Formatter for FormatFunc<F>
where
    F: Fn(&Record) -> Vec<u8> + Send + Sync,
{
    fn format(&self, record: &Record) -> Vec<u8> {
        (self.0)(record)
    }
}

/// Lift a function into a [`Formatter`]
pub fn format_func<F>(func: F) -> FormatFunc<F>
where
    F: Fn(&Record) -> Vec<u8> + Send + Sync,
{
    FormatFunc(func)
}
