//! A complete syslog message and its serializations

use super::error::{LoggerError, Result};
use super::header::Header;
use super::metadata::Metadata;
use super::optional::NIL_VALUE;
use super::payload::PayloadValue;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Header, structured data and payload of one log event
///
/// Text rendering follows RFC5424:
///
/// ```text
/// <PRI>VERSION TIMESTAMP HOSTNAME APPNAME PROCID MSGID STRUCTURED-DATA MESSAGE
/// ```
///
/// # Example
///
/// ```
/// use rust_syslog_logger::prelude::*;
///
/// let header = Header::minimal(Priority::new(Facility::Local4, Severity::Notice), Version::V1);
/// let message = Message::new(header, Vec::new(), vec!["foo".into(), "bar".into()]);
///
/// assert_eq!(message.to_text(), "<165>1 - - - - - - foo bar");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "Header")]
    pub header: Header,
    #[serde(rename = "Metadata", default, deserialize_with = "null_as_empty")]
    pub metadata: Vec<Metadata>,
    #[serde(rename = "Message", default, deserialize_with = "null_as_empty")]
    pub payload: Vec<PayloadValue>,
}

impl Message {
    pub fn new(header: Header, metadata: Vec<Metadata>, payload: Vec<PayloadValue>) -> Self {
        Self {
            header,
            metadata,
            payload,
        }
    }

    /// RFC5424 text form
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// JSON object with `Header`, `Metadata` and `Message` keys
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(LoggerError::Encoding)
    }

    /// Indented variant of [`Message::to_json`]
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(LoggerError::Encoding)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(LoggerError::Decoding)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.header)?;

        if self.metadata.is_empty() {
            f.write_str(NIL_VALUE)?;
        } else {
            for element in &self.metadata {
                write!(f, "{}", element)?;
            }
        }

        for value in &self.payload {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
