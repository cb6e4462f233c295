//! Handler trait for log record consumers

use super::{error::Result, record::Record};
use std::sync::Arc;

/// Consumes records, possibly failing
///
/// Handlers compose by wrapping: a wrapper performs its own step and then
/// delegates to the handler it was built around. The record is mutable so
/// that resolving handlers can rewrite context values in place.
pub trait Handler: Send + Sync {
    fn log(&self, record: &mut Record) -> Result<()>;
}

/// Shared, type-erased handler value
pub type HandlerRef = Arc<dyn Handler>;

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn log(&self, record: &mut Record) -> Result<()> {
        (**self).log(record)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn log(&self, record: &mut Record) -> Result<()> {
        (**self).log(record)
    }
}
