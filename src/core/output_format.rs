//! Output format configuration for messages
//!
//! Provides the serializations a writer can emit:
//! - Text: RFC5424 wire text (default)
//! - Json: single-line JSON object
//! - JsonPretty: indented JSON object

use super::error::Result;
use super::message::Message;
use serde::{Deserialize, Serialize};

/// Output format for messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// RFC5424 text
    ///
    /// Example: `<14>1 2025-01-08T10:30:45Z web01 api - - - Request processed`
    #[default]
    Text,

    /// JSON for machine processing
    ///
    /// Example: `{"Header":{...},"Metadata":[],"Message":["Request processed"]}`
    Json,

    /// Multi-line indented JSON
    JsonPretty,
}

impl OutputFormat {
    /// Serialize a message according to this output format
    ///
    /// Only the JSON formats can fail, when a payload value has no JSON
    /// representation.
    pub fn format(&self, message: &Message) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(message.to_text()),
            OutputFormat::Json => message.to_json(),
            OutputFormat::JsonPretty => message.to_json_pretty(),
        }
    }
}
