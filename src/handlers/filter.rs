//! Optional gating and annotating wrappers

use crate::core::{CallSite, Handler, HandlerRef, LogLevel, Record, Result, Value};
use std::sync::Arc;

/// Passes a record on only when the predicate accepts it
pub struct FilterHandler<P, H> {
    predicate: P,
    inner: H,
}

impl<P, H> FilterHandler<P, H>
where
    P: Fn(&Record) -> bool + Send + Sync,
    H: Handler,
{
    pub fn new(predicate: P, inner: H) -> Self {
        Self { predicate, inner }
    }
}

impl<P, H> Handler for FilterHandler<P, H>
where
    P: Fn(&Record) -> bool + Send + Sync,
    H: Handler,
{
    fn log(&self, record: &mut Record) -> Result<()> {
        if (self.predicate)(record) {
            self.inner.log(record)
        } else {
            Ok(())
        }
    }
}

pub fn filter_handler<P, H>(predicate: P, inner: H) -> HandlerRef
where
    P: Fn(&Record) -> bool + Send + Sync + 'static,
    H: Handler + 'static,
{
    Arc::new(FilterHandler::new(predicate, inner))
}

/// Drops records less severe than `min_level`
pub fn level_filter_handler<H: Handler + 'static>(min_level: LogLevel, inner: H) -> HandlerRef {
    filter_handler(move |r: &Record| r.level >= min_level, inner)
}

/// Key under which [`CallerHandler`] records the call site
pub const CALLER_KEY: &str = "caller";

/// Appends `caller=<file>:<line>` to each record
///
/// The pair is visible only to the inner handler: it is removed again
/// before returning, so siblings in a fan-out see the record unchanged.
pub struct CallerHandler<H> {
    inner: H,
}

impl<H: Handler> CallerHandler<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Handler> Handler for CallerHandler<H> {
    fn log(&self, record: &mut Record) -> Result<()> {
        let call: CallSite = record.call;
        let len = record.context.len();
        record.context.push(Value::from(CALLER_KEY));
        record.context.push(Value::from(call.to_string()));
        let result = self.inner.log(record);
        record.context.truncate(len);
        result
    }
}

pub fn caller_handler<H: Handler + 'static>(inner: H) -> HandlerRef {
    Arc::new(CallerHandler::new(inner))
}
