//! File logging example
//!
//! Demonstrates writing one JSON message per line to a file and reading
//! the messages back.
//!
//! Run with: cargo run --example file_logging

use rust_syslog_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Syslog Logger - File Logging Example ===\n");

    let path = std::env::temp_dir().join("rust_syslog_logger_demo.log");
    let writer = FileWriter::new(&path)?.with_output_format(OutputFormat::Json);

    let logger = Logger::builder()
        .facility(Facility::Daemon)
        .host_name("localhost")
        .app_name("file_logging")
        .metadata(Metadata::new("origin").with_param("software", "file_logging"))
        .writer(writer)
        .build();

    println!("1. Logging to {}", path.display());
    logger.informational(["Application started"])?;
    logger.debug(["Loading configuration..."])?;
    logger.warning(["Using default settings for some options"])?;
    logger.error(["Failed to load optional plugin"])?;

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        logger.informational(["Processing item".into(), PayloadValue::from(i), "of 5".into()])?;
    }
    logger.flush()?;

    println!("\n3. Reading the file back:");
    let content = std::fs::read_to_string(&path)?;
    for line in content.lines() {
        let message = Message::from_json(line)?;
        println!("   {}", message);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
