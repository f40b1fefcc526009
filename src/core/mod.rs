//! Core message model and logger types

pub mod error;
pub mod facility;
pub mod header;
pub mod logger;
pub mod message;
pub mod metadata;
pub mod metrics;
pub mod optional;
pub mod output_format;
pub mod payload;
pub mod priority;
pub mod severity;
pub mod timestamp;
pub mod writer;

pub use error::{LoggerError, Result};
pub use facility::Facility;
pub use header::{AppName, Header, HostName, MessageID, ProcessID, Version};
pub use logger::{Logger, LoggerBuilder};
pub use message::Message;
pub use metadata::{escape_param_value, Metadata, MetadataParam};
pub use metrics::LoggerMetrics;
pub use optional::{Optional, Placeholder, NIL_VALUE};
pub use output_format::OutputFormat;
pub use payload::PayloadValue;
pub use priority::Priority;
pub use severity::Severity;
pub use timestamp::Timestamp;
pub use writer::Writer;
