//! Basic logger usage example
//!
//! Demonstrates leveled logging with typed fields, the at-most-once error
//! helpers, and switching to JSON output.
//!
//! Run with: cargo run --example basic_usage

use rust_field_logger::prelude::*;
use rust_field_logger::{info, package_logger};

fn open_config(logger: &Logger, path: &str) -> std::result::Result<String, LoggedError> {
    std::fs::read_to_string(path).map_err(|err| logger.errore(err))
}

fn load(logger: &Logger) -> std::result::Result<String, LoggedError> {
    // Already logged inside open_config; this adds no second entry
    open_config(logger, "/nonexistent/app.toml").map_err(|err| logger.errore(err))
}

fn main() -> Result<()> {
    println!("=== Field Logger - Basic Usage Example ===\n");

    let logger = Logger::new("demo");

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message", &[]);
    logger.info("This is an info message", &[]);
    logger.warn("This is a warning message", &[]);
    logger.error("This is an error message", &[]);

    println!("\n2. Typed fields:");
    logger.info(
        "request served",
        &[
            fields::string("path", "/users"),
            fields::uint16("status", 200),
            fields::int64("latency_us", 1532),
            fields::bytes("etag", &[0xde, 0xad, 0xbe, 0xef]),
            fields::strings("roles", &["admin", "ops"]),
            fields::postpone_line_number("line"),
        ],
    );

    println!("\n3. Standard fields and the module logger:");
    let worker = package_logger!().with_fields([fields::uint("worker", 3)]);
    info!(worker, [fields::bool("idle", true)], "Worker {} ready", 3);

    println!("\n4. Errors are logged once:");
    if load(&logger).is_err() {
        logger.errorex("startup aborted", "no configuration", &[]);
    }

    println!("\n5. Threshold set to WARN - debug and info won't show:");
    let config = logger.config();
    config.set_level("warn".parse()?);
    logger.debug("Debug message (hidden)", &[]);
    logger.info("Info message (hidden)", &[]);
    logger.warn("Warning message (visible)", &[]);

    println!("\n6. JSON output:");
    config.set_level(Level::Debug);
    config.set_writer(Some(std::sync::Arc::new(JsonWriter::new(Sink::stderr()))));
    logger.info("switched to json", &[fields::float64("ratio", 0.75)]);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
