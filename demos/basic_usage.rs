//! Basic logger usage example
//!
//! Demonstrates RFC5424 console output at every severity, the severity
//! threshold and the logging macros.
//!
//! Run with: cargo run --example basic_usage

use rust_syslog_logger::prelude::*;
use rust_syslog_logger::{informational, warning};

fn main() -> Result<()> {
    println!("=== Rust Syslog Logger - Basic Usage Example ===\n");

    let mut logger = Logger::builder()
        .facility(Facility::Local4)
        .host_name("localhost")
        .app_name("basic_usage")
        .process_id(std::process::id().to_string())
        .metadata(
            Metadata::new("exampleSDID@1")
                .with_param("eventID", "1011")
                .with_param("eventSource", "Application"),
        )
        .writer(ConsoleWriter::stderr())
        .build();

    println!("1. Logging at every severity:");
    logger.emergency(["This is an emergency message"])?;
    logger.alert(["This is an alert message"])?;
    logger.critical(["This is a critical message"])?;
    logger.error(["This is an error message"])?;
    logger.warning(["This is a warning message"])?;
    logger.notice(["This is a notice message"])?;
    logger.informational(["This is an informational message"])?;
    logger.debug(["This is a debug message"])?;

    println!("\n2. Restricting to warning and more urgent:");
    logger.set_max_severity(Severity::Warning);
    logger.debug(["Debug message (hidden)"])?;
    logger.notice(["Notice message (hidden)"])?;
    logger.warning(["Warning message (visible)"])?;

    println!("\n3. Mixed payload through the macros:");
    logger.set_max_severity(Severity::Debug);
    informational!(logger, "disk usage", 93, "%")?;
    warning!(logger, "retrying", true, 1.5)?;

    let metrics = logger.metrics();
    println!(
        "\nwritten={} skipped={} failed={}",
        metrics.total_written(),
        metrics.skipped_count(),
        metrics.failed_count()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
