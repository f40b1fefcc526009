//! # Rust Syslog Logger
//!
//! RFC5424 structured log messages with deterministic text and JSON
//! serialization.
//!
//! ## Features
//!
//! - **Message model**: priority, header, structured data and payload
//! - **Exact wire text**: `<PRI>VERSION TIMESTAMP HOSTNAME APPNAME PROCID MSGID SD MSG`
//! - **JSON output**: the same message as a `Header`/`Metadata`/`Message` object
//! - **Pluggable writers**: console, file and in-memory sinks
//!
//! ## Example
//!
//! ```
//! use rust_syslog_logger::prelude::*;
//! use rust_syslog_logger::notice;
//!
//! let sink = MemoryWriter::new();
//! let logger = Logger::builder()
//!     .facility(Facility::Local4)
//!     .host_name("localhost")
//!     .writer(sink.clone())
//!     .build();
//!
//! notice!(logger, "disk usage", 93, "%").unwrap();
//! assert!(sink.lines()[0].ends_with("localhost - - - - disk usage 93 %"));
//! ```

pub mod core;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        AppName, Facility, Header, HostName, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
        Message, MessageID, Metadata, MetadataParam, Optional, OutputFormat, PayloadValue,
        Priority, ProcessID, Result, Severity, Timestamp, Version, Writer,
    };
    #[cfg(feature = "file")]
    pub use crate::writers::FileWriter;
    pub use crate::writers::{ConsoleTarget, ConsoleWriter, MemoryWriter};
}

pub use self::core::{
    AppName, Facility, Header, HostName, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
    Message, MessageID, Metadata, MetadataParam, Optional, OutputFormat, PayloadValue, Priority,
    ProcessID, Result, Severity, Timestamp, Version, Writer,
};
#[cfg(feature = "file")]
pub use self::writers::FileWriter;
pub use self::writers::{ConsoleTarget, ConsoleWriter, MemoryWriter};
