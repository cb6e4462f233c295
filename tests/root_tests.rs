//! Tests for the process-wide root logger
//!
//! Kept in their own test binary since they install global state.

use parking_lot::Mutex;
use rust_structured_logger::handlers::func_handler;
use rust_structured_logger::prelude::*;
use rust_structured_logger::{root, set_root};
use std::sync::Arc;

#[test]
fn test_root_free_functions() {
    let seen = Arc::new(Mutex::new(Vec::<Record>::new()));
    let sink = Arc::clone(&seen);
    let handler = func_handler(move |r| {
        sink.lock().push(r.clone());
        Ok(())
    });

    set_root(Logger::new(handler).child(["app", "demo"])).expect("root not yet used");
    assert!(matches!(
        set_root(Logger::new(discard_handler())),
        Err(LoggerError::RootAlreadyInitialized)
    ));

    root::info_with_context("hello", ["user", "alice"]);
    let line = line!() - 1;
    root::with_field("request", 9).warn("slow");
    root::new(["job", "sync"]).debug("child of root");

    let seen = seen.lock();
    assert_eq!(seen.len(), 3);

    assert_eq!(seen[0].message, "hello");
    assert_eq!(seen[0].call.file, file!());
    assert_eq!(seen[0].call.line, line);
    assert_eq!(seen[0].get("app"), Some(&Value::from("demo")));
    assert_eq!(seen[0].get("user"), Some(&Value::from("alice")));

    assert_eq!(seen[1].level, LogLevel::Warn);
    assert_eq!(seen[1].get("request"), Some(&Value::Int(9)));

    assert_eq!(seen[2].get("job"), Some(&Value::from("sync")));
    assert_eq!(seen[2].get("app"), Some(&Value::from("demo")));
    drop(seen);

    // the root logger can still be redirected in place
    root().set_handler(discard_handler());
    root::error("dropped");
}
