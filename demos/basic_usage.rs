//! Basic logger usage example
//!
//! Demonstrates levels, child loggers and live handler replacement.
//!
//! Run with: cargo run --example basic_usage

use rust_structured_logger::prelude::*;
use rust_structured_logger::{ctx, info};

fn main() -> Result<()> {
    println!("=== Rust Structured Logger - Basic Usage Example ===\n");

    // Terminal output when attached to a TTY, logfmt otherwise
    let logger = Logger::new(stdout_handler());

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Context pairs and child loggers:");
    let db = logger.child(["component", "db"]);
    db.info_with_context("connected", ctx!["host", "localhost", "pool_size", 8]);
    db.child(Ctx::new().with("table", "orders"))
        .warn_with_context("slow query", ["elapsed_ms", "1200"]);

    println!("\n3. Fields for the next record only:");
    logger.with_field("request_id", "r-17").info("handled");
    logger.info("no request_id here");

    println!("\n4. Formatted messages:");
    info!(logger, "processed {} items in {}ms", 120, 35; "batch" => 4);

    println!("\n5. Minimum level set to WARN - debug and info won't show:");
    logger.set_handler(level_filter_handler(LogLevel::Warn, stdout_handler()));
    logger.debug("Debug message (hidden)");
    logger.info("Info message (hidden)");
    logger.warn("Warning message (visible)");

    println!("\n6. JSON output:");
    logger.set_handler(stream_handler(std::io::stdout(), JsonFormat::new()));
    logger.error_with_context("payment declined", ["order", "1234"]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
