//! Lazy-value resolving wrapper

use crate::core::{Handler, HandlerRef, Record, Result, Value, ERROR_KEY};
use std::sync::Arc;

/// Marker value appended once when any lazy value in a record fails
pub const BAD_LAZY: &str = "bad lazy";

/// Evaluates every lazy value in a record's context, then delegates
///
/// Each value slot (odd position) holding a [`Value::Lazy`] is overwritten
/// with its result. A failing lazy leaves an error value in its slot, and
/// a single `(LOG_ERROR, "bad lazy")` pair is appended however many failed.
///
/// Place this outside [`crate::handlers::SyncHandler`] so user computation
/// runs before the write lock is taken.
pub struct LazyHandler<H> {
    inner: H,
}

impl<H: Handler> LazyHandler<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Handler> Handler for LazyHandler<H> {
    fn log(&self, record: &mut Record) -> Result<()> {
        resolve_lazy_values(record);
        self.inner.log(record)
    }
}

pub fn lazy_handler<H: Handler + 'static>(inner: H) -> HandlerRef {
    Arc::new(LazyHandler::new(inner))
}

/// Resolve lazy values in place, returning how many failed
pub fn resolve_lazy_values(record: &mut Record) -> usize {
    let mut failures = 0;
    for slot in record.context.iter_mut().skip(1).step_by(2) {
        let Value::Lazy(lazy) = slot else {
            continue;
        };
        let result = lazy.evaluate();
        *slot = match result {
            Ok(value) => value,
            Err(err) => {
                failures += 1;
                Value::error(err)
            }
        };
    }

    if failures > 0 {
        record.context.push(Value::from(ERROR_KEY));
        record.context.push(Value::from(BAD_LAZY));
    }
    failures
}
