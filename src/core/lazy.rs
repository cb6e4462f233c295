//! Deferred context values
//!
//! A [`Lazy`] wraps a zero-argument closure whose result is only computed
//! when a record reaches a [`crate::handlers::LazyHandler`]. Placed in a
//! logger's inherited context, it reports the current value of changing
//! state on every emission.

use super::error::{LoggerError, Result};
use super::value::Value;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

type LazyFn = dyn Fn() -> std::result::Result<Value, String> + Send + Sync;

/// Deferred value descriptor
///
/// Arity is fixed by the closure type, so a lazy value can only fail when
/// evaluated: the closure returned an error or panicked.
#[derive(Clone)]
pub struct Lazy {
    func: Arc<LazyFn>,
}

impl Lazy {
    /// Placeholder rendered for a lazy value that was never resolved
    pub const UNRESOLVED: &'static str = "<lazy>";

    /// Defer an infallible computation
    ///
    /// # Example
    ///
    /// ```
    /// use rust_structured_logger::{Lazy, Value};
    ///
    /// let lazy = Lazy::new(|| 6 * 7);
    /// assert_eq!(lazy.evaluate().unwrap(), Value::Int(42));
    /// ```
    pub fn new<F, T>(func: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Into<Value>,
    {
        Self {
            func: Arc::new(move || Ok(func().into())),
        }
    }

    /// Defer a computation that may fail
    ///
    /// A failure replaces the value with an error value and marks the
    /// record with a `bad lazy` pair.
    pub fn fallible<F, T, E>(func: F) -> Self
    where
        F: Fn() -> std::result::Result<T, E> + Send + Sync + 'static,
        T: Into<Value>,
        E: fmt::Display,
    {
        Self {
            func: Arc::new(move || func().map(Into::into).map_err(|e| e.to_string())),
        }
    }

    /// Run the callable once
    pub fn evaluate(&self) -> Result<Value> {
        match catch_unwind(AssertUnwindSafe(|| (self.func)())) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(msg)) => Err(LoggerError::bad_lazy(msg)),
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                Err(LoggerError::bad_lazy(format!("panicked: {}", panic_msg)))
            }
        }
    }

    pub(crate) fn same_callable(&self, other: &Lazy) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Lazy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Lazy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_evaluate_each_call_runs_closure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let lazy = Lazy::new(move || counter.fetch_add(1, Ordering::SeqCst) + 1);

        assert_eq!(lazy.evaluate().unwrap(), Value::Uint(1));
        assert_eq!(lazy.evaluate().unwrap(), Value::Uint(2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_fallible_error() {
        let lazy = Lazy::fallible(|| "x".parse::<i64>());
        let err = lazy.evaluate().unwrap_err();
        assert!(matches!(err, LoggerError::BadLazy(_)));
    }

    #[test]
    fn test_panic_is_contained() {
        let lazy = Lazy::new(|| -> i64 { panic!("no value today") });
        let err = lazy.evaluate().unwrap_err();
        assert!(err.to_string().contains("no value today"));
    }
}
