//! Serializing wrapper

use crate::core::{Handler, HandlerRef, Record, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Lets only one record at a time through to the inner handler
///
/// Wrap this directly around anything that writes to a shared sink so
/// concurrent emitters never interleave partial writes.
pub struct SyncHandler<H> {
    inner: H,
    lock: Mutex<()>,
}

impl<H: Handler> SyncHandler<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            lock: Mutex::new(()),
        }
    }

    /// Whether a record is currently inside the critical section
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }
}

impl<H: Handler> Handler for SyncHandler<H> {
    fn log(&self, record: &mut Record) -> Result<()> {
        let _guard = self.lock.lock();
        self.inner.log(record)
    }
}

pub fn sync_handler<H: Handler + 'static>(inner: H) -> HandlerRef {
    Arc::new(SyncHandler::new(inner))
}
