//! Main logger implementation

use super::{
    context::{extend_context, ContextArgs, Fields},
    handler::{Handler, HandlerRef},
    log_level::LogLevel,
    record::{CallSite, Record},
    value::Value,
};
use crate::handlers::SwapHandler;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Exit status used after a fatal record has been written
pub const FATAL_EXIT_CODE: i32 = 1;

/// Writes leveled records, carrying an inherited key/value context
///
/// Each logger owns its own handler slot. A child made with
/// [`Logger::child`] starts with its parent's current handler but can be
/// redirected independently, and its context is a fresh copy of the
/// parent's plus the new pairs.
///
/// Emission never reports handler errors to the caller. Records are not
/// filtered by level here; install a filtering handler for that.
///
/// # Example
///
/// ```
/// use rust_structured_logger::prelude::*;
///
/// let logger = Logger::new(discard_handler());
/// let requests = logger.child(["component", "http"]);
/// requests.info_with_context("request done", ["status", "200"]);
/// ```
pub struct Logger {
    context: Arc<[Value]>,
    handler: SwapHandler,
    fields: Mutex<Fields>,
}

impl Logger {
    /// Create a logger with an empty context writing to `handler`
    #[must_use]
    pub fn new(handler: HandlerRef) -> Self {
        Self::with_context(Vec::new(), handler)
    }

    fn with_context(context: Vec<Value>, handler: HandlerRef) -> Self {
        Self {
            context: context.into(),
            handler: SwapHandler::new(handler),
            fields: Mutex::new(Fields::new()),
        }
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Derive a logger with this logger's context plus `ctx`
    ///
    /// The child gets its own handler slot, initialised to this logger's
    /// current handler.
    #[must_use]
    pub fn child(&self, ctx: impl Into<ContextArgs>) -> Logger {
        Logger::with_context(extend_context(&self.context, ctx.into()), self.get_handler())
    }

    /// The inherited key/value context
    pub fn context(&self) -> &[Value] {
        &self.context
    }

    /// The handler records are currently written to
    pub fn get_handler(&self) -> HandlerRef {
        self.handler.get()
    }

    /// Redirect this logger's records to `handler`
    pub fn set_handler(&self, handler: HandlerRef) {
        self.handler.swap(handler);
    }

    /// Attach a field to the next record emitted by this logger
    ///
    /// Fields are merged after the inherited context and cleared once the
    /// next record has been emitted.
    ///
    /// ```
    /// # use rust_structured_logger::prelude::*;
    /// # let logger = Logger::new(discard_handler());
    /// logger.with_field("order_id", 17).info("order shipped");
    /// ```
    pub fn with_field(&self, key: impl Into<String>, value: impl Into<Value>) -> &Self {
        self.fields.lock().set(key, value);
        self
    }

    /// Attach several fields to the next record emitted by this logger
    pub fn with_fields<I, K, V>(&self, fields: I) -> &Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut pending = self.fields.lock();
        for (key, value) in fields {
            pending.set(key, value);
        }
        self
    }

    /// Emit a record at `level`
    ///
    /// A `Fatal` record terminates the process once it has been handled.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>, ctx: impl Into<ContextArgs>) {
        self.write(level, message.into(), ctx.into());
    }

    #[track_caller]
    fn write(&self, level: LogLevel, message: String, ctx: ContextArgs) {
        let mut record = self.build_record(level, message, ctx, CallSite::caller());
        let _ = self.handler.log(&mut record);

        if level == LogLevel::Fatal {
            std::process::exit(FATAL_EXIT_CODE);
        }
    }

    /// Assemble the record for one emission, consuming pending fields
    fn build_record(
        &self,
        level: LogLevel,
        message: String,
        ctx: ContextArgs,
        call: CallSite,
    ) -> Record {
        let fields = std::mem::take(&mut *self.fields.lock()).into_pairs();
        let extra = ctx.normalize();

        let mut context = Vec::with_capacity(self.context.len() + fields.len() + extra.len());
        context.extend_from_slice(&self.context);
        context.extend(fields);
        context.extend(extra);

        Record::new(level, message, context).with_call_site(call)
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) {
        self.write(LogLevel::Trace, message.into(), ContextArgs::empty());
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.write(LogLevel::Debug, message.into(), ContextArgs::empty());
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.write(LogLevel::Info, message.into(), ContextArgs::empty());
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.write(LogLevel::Warn, message.into(), ContextArgs::empty());
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.write(LogLevel::Error, message.into(), ContextArgs::empty());
    }

    /// Log at fatal level, then exit the process
    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.write(LogLevel::Fatal, message.into(), ContextArgs::empty());
    }

    #[track_caller]
    pub fn trace_with_context(&self, message: impl Into<String>, ctx: impl Into<ContextArgs>) {
        self.write(LogLevel::Trace, message.into(), ctx.into());
    }

    #[track_caller]
    pub fn debug_with_context(&self, message: impl Into<String>, ctx: impl Into<ContextArgs>) {
        self.write(LogLevel::Debug, message.into(), ctx.into());
    }

    #[track_caller]
    pub fn info_with_context(&self, message: impl Into<String>, ctx: impl Into<ContextArgs>) {
        self.write(LogLevel::Info, message.into(), ctx.into());
    }

    #[track_caller]
    pub fn warn_with_context(&self, message: impl Into<String>, ctx: impl Into<ContextArgs>) {
        self.write(LogLevel::Warn, message.into(), ctx.into());
    }

    #[track_caller]
    pub fn error_with_context(&self, message: impl Into<String>, ctx: impl Into<ContextArgs>) {
        self.write(LogLevel::Error, message.into(), ctx.into());
    }

    /// Log at fatal level with context, then exit the process
    #[track_caller]
    pub fn fatal_with_context(&self, message: impl Into<String>, ctx: impl Into<ContextArgs>) {
        self.write(LogLevel::Fatal, message.into(), ctx.into());
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_structured_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .context(["service", "billing"])
///     .handler(stream_handler(std::io::stderr(), LogfmtFormat::new()))
///     .build();
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    context: Vec<Value>,
    handler: Option<HandlerRef>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Append key/value pairs to the logger's inherited context
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, ctx: impl Into<ContextArgs>) -> Self {
        self.context = extend_context(&self.context, ctx.into());
        self
    }

    /// Set the handler records are written to
    ///
    /// If not called, the logger writes to stdout with the format chosen
    /// by [`crate::root::stdout_handler`].
    #[must_use = "builder methods return a new value"]
    pub fn handler(mut self, handler: HandlerRef) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let handler = self.handler.unwrap_or_else(crate::root::stdout_handler);
        Logger::with_context(self.context, handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Ctx, Lazy, ERROR_KEY};
    use crate::handlers::{discard_handler, func_handler};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn capture() -> (HandlerRef, Arc<Mutex<Vec<Record>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handler = func_handler(move |r| {
            sink.lock().push(r.clone());
            Ok(())
        });
        (handler, seen)
    }

    fn strings(values: &[Value]) -> Vec<String> {
        values.iter().map(Value::to_string).collect()
    }

    #[test]
    fn test_record_merges_inherited_and_call_context() {
        let (handler, seen) = capture();
        let logger = Logger::new(handler).child(["app", "billing"]);

        logger.info_with_context("hello", ["user", "alice"]);

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].level, LogLevel::Info);
        assert_eq!(seen[0].message, "hello");
        assert_eq!(strings(&seen[0].context), ["app", "billing", "user", "alice"]);
    }

    #[test]
    fn test_odd_context_is_repaired() {
        let (handler, seen) = capture();
        let logger = Logger::new(handler);

        logger.warn_with_context("odd", vec![Value::from("dangling")]);

        let record = &seen.lock()[0];
        assert_eq!(record.context.len(), 4);
        assert_eq!(record.context[1], Value::Null);
        assert_eq!(record.context[2], Value::from(ERROR_KEY));
    }

    #[test]
    fn test_ctx_map_is_expanded() {
        let (handler, seen) = capture();
        let logger = Logger::new(handler);

        logger.debug_with_context("map", Ctx::new().with("a", 1).with("b", 2));

        let record = &seen.lock()[0];
        assert_eq!(record.context.len(), 4);
        assert_eq!(record.get("a"), Some(&Value::Int(1)));
        assert_eq!(record.get("b"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_child_context_does_not_touch_parent() {
        let parent = Logger::new(discard_handler()).child(["a", "1"]);
        let first = parent.child(["b", "2"]);
        let second = parent.child(["c", "3"]);

        assert_eq!(strings(parent.context()), ["a", "1"]);
        assert_eq!(strings(first.context()), ["a", "1", "b", "2"]);
        assert_eq!(strings(second.context()), ["a", "1", "c", "3"]);
    }

    #[test]
    fn test_child_handler_is_independent() {
        let parent = Logger::new(discard_handler());
        let original = parent.get_handler();
        let child = parent.child(["k", "v"]);
        assert!(Arc::ptr_eq(&child.get_handler(), &original));

        let replacement = discard_handler();
        child.set_handler(Arc::clone(&replacement));
        assert!(Arc::ptr_eq(&parent.get_handler(), &original));

        let parent_replacement = discard_handler();
        parent.set_handler(Arc::clone(&parent_replacement));
        assert!(Arc::ptr_eq(&child.get_handler(), &replacement));
    }

    #[test]
    fn test_fields_apply_to_next_record_only() {
        let (handler, seen) = capture();
        let logger = Logger::new(handler).child(["svc", "api"]);

        logger
            .with_field("order", 17)
            .with_fields([("region", "eu")])
            .info_with_context("shipped", ["carrier", "dhl"]);
        logger.info("next");

        let seen = seen.lock();
        assert_eq!(
            strings(&seen[0].context),
            ["svc", "api", "order", "17", "region", "eu", "carrier", "dhl"]
        );
        assert_eq!(strings(&seen[1].context), ["svc", "api"]);
    }

    #[test]
    fn test_lazy_values_are_not_evaluated_by_logger() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let (handler, seen) = capture();
        let logger = Logger::new(handler);

        logger.info_with_context(
            "deferred",
            vec![
                Value::from("n"),
                Value::from(Lazy::new(move || counter.fetch_add(1, Ordering::SeqCst))),
            ],
        );

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(seen.lock()[0].context[1].is_lazy());
    }

    #[test]
    fn test_call_site_is_user_code() {
        let (handler, seen) = capture();
        let logger = Logger::new(handler);

        logger.error("located");
        let line = line!() - 1;

        let call = seen.lock()[0].call;
        assert_eq!(call.file, file!());
        assert_eq!(call.line, line);
    }

    #[test]
    fn test_handler_errors_are_ignored() {
        let logger = Logger::new(func_handler(|_| Err(crate::LoggerError::writer("down"))));
        logger.info("nobody hears this");
    }

    #[test]
    fn test_builder() {
        let (handler, seen) = capture();
        let logger = Logger::builder()
            .context(["service", "billing"])
            .context(vec![Value::from("odd")])
            .handler(handler)
            .build();

        logger.trace("built");
        assert_eq!(seen.lock()[0].context.len(), 6);
        assert_eq!(seen.lock()[0].level, LogLevel::Trace);
    }
}
