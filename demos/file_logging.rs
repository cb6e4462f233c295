//! File logging example
//!
//! Demonstrates fanning records out to the console and a file at once.
//!
//! Run with: cargo run --example file_logging

use rust_structured_logger::ctx;
use rust_structured_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Structured Logger - File Logging Example ===\n");

    // Console gets everything, the file gets warnings and above as JSON
    let file = file_handler("application.log", JsonFormat::new())?;
    let logger = Logger::new(multi_handler([
        stdout_handler(),
        level_filter_handler(LogLevel::Warn, file),
    ]))
    .child(["app", "file_logging"]);

    println!("1. Logging to both console and file:");

    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.warn("Using default settings for some options");
    logger.info_with_context("Connecting to database...", ["host", "localhost"]);
    logger.error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");

    for i in 1..=5 {
        logger.info_with_context("Processing item", ctx!["item", i]);
        if i == 3 {
            logger.warn_with_context("Item took longer than expected", ["item", "3"]);
        }
    }

    println!("\n3. Adding the call site to every record:");
    logger.set_handler(caller_handler(stdout_handler()));
    logger.info("Where was I called from?");

    println!("\n=== Example completed successfully! ===");
    println!("Warnings and errors were appended to: application.log");

    Ok(())
}
