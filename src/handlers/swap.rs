//! Atomically replaceable handler slot

use crate::core::{Handler, HandlerRef, Record, Result};
use arc_swap::ArcSwap;
use std::fmt;
use std::sync::Arc;

/// Holds the current handler and lets it be replaced while in use
///
/// Readers never block: [`SwapHandler::get`] and [`Handler::log`] load
/// whatever was most recently stored. A record already being handled by
/// the previous handler finishes on that handler.
pub struct SwapHandler {
    handler: ArcSwap<HandlerRef>,
}

impl SwapHandler {
    pub fn new(handler: HandlerRef) -> Self {
        Self {
            handler: ArcSwap::from_pointee(handler),
        }
    }

    /// The most recently stored handler
    pub fn get(&self) -> HandlerRef {
        let current = self.handler.load();
        Arc::clone(&**current)
    }

    /// Publish a new handler
    pub fn swap(&self, handler: HandlerRef) {
        self.handler.store(Arc::new(handler));
    }
}

impl Handler for SwapHandler {
    fn log(&self, record: &mut Record) -> Result<()> {
        // owned Arc, so no guard is held across downstream I/O
        self.handler.load_full().log(record)
    }
}

impl fmt::Debug for SwapHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwapHandler").finish_non_exhaustive()
    }
}
