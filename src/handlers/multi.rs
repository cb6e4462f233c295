//! Fan-out wrapper

use crate::core::{Handler, HandlerRef, Record, Result};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Sends every record to each inner handler, in order
///
/// Delivery is best effort: an error from one handler is dropped and the
/// remaining handlers still receive the record. A panicking handler is
/// reported on stderr and skipped. Always returns `Ok(())`.
pub struct MultiHandler {
    handlers: Vec<HandlerRef>,
}

impl MultiHandler {
    pub fn new(handlers: Vec<HandlerRef>) -> Self {
        Self { handlers }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Handler for MultiHandler {
    fn log(&self, record: &mut Record) -> Result<()> {
        for (idx, handler) in self.handlers.iter().enumerate() {
            // errors are dropped; panics are contained to the one handler
            if catch_unwind(AssertUnwindSafe(|| handler.log(record))).is_err() {
                eprintln!("[LOGGER ERROR] Handler #{} panicked", idx);
            }
        }
        Ok(())
    }
}

pub fn multi_handler(handlers: impl IntoIterator<Item = HandlerRef>) -> HandlerRef {
    Arc::new(MultiHandler::new(handlers.into_iter().collect()))
}
