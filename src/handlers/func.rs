//! Function adapter and trivial handlers

use crate::core::{Handler, HandlerRef, Record, Result};
use std::sync::Arc;

/// Handler backed by a plain function
pub struct FuncHandler<F>(F);

impl<F> FuncHandler<F>
where
    F: Fn(&mut Record) -> Result<()> + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self(func)
    }
}

impl<F> Handler for FuncHandler<F>
where
    F: Fn(&mut Record) -> Result<()> + Send + Sync,
{
    fn log(&self, record: &mut Record) -> Result<()> {
        (self.0)(record)
    }
}

/// Lift a function into a shared handler
pub fn func_handler<F>(func: F) -> HandlerRef
where
    F: Fn(&mut Record) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(FuncHandler::new(func))
}

/// Accepts and drops every record
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardHandler;

impl Handler for DiscardHandler {
    fn log(&self, _record: &mut Record) -> Result<()> {
        Ok(())
    }
}

pub fn discard_handler() -> HandlerRef {
    Arc::new(DiscardHandler)
}
