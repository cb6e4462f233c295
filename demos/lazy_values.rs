//! Lazy value example
//!
//! Demonstrates context values computed only when a record is written.
//!
//! Run with: cargo run --example lazy_values

use rust_structured_logger::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Structured Logger - Lazy Values Example ===\n");

    let connections = Arc::new(AtomicUsize::new(0));
    let gauge = Arc::clone(&connections);

    // Every record from this logger reports the count at write time
    let logger = Logger::new(stdout_handler()).child(vec![
        Value::from("open_connections"),
        Value::from(Lazy::new(move || gauge.load(Ordering::SeqCst))),
    ]);

    println!("1. Inherited lazy values track current state:");
    logger.info("server ready");
    connections.fetch_add(3, Ordering::SeqCst);
    logger.info("clients connected");

    println!("\n2. Filtered records never evaluate their lazy values:");
    let evaluations = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&evaluations);
    let quiet = Logger::new(level_filter_handler(LogLevel::Info, stdout_handler()));
    quiet.debug_with_context(
        "expensive dump",
        vec![
            Value::from("state"),
            Value::from(Lazy::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                "huge"
            })),
        ],
    );
    println!("   evaluations: {}", evaluations.load(Ordering::SeqCst));

    println!("\n3. Failing lazy values are reported, not fatal:");
    logger.warn_with_context(
        "cache lookup",
        vec![
            Value::from("entry"),
            Value::from(Lazy::fallible(|| Err::<String, _>("cache offline"))),
        ],
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
