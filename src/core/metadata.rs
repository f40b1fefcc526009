//! STRUCTURED-DATA elements
//!
//! An element renders as `[ID name="value" ...]`. Parameter values escape
//! `\`, `"` and `]` with a leading backslash (RFC5424 §6.3.3).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Escape a PARAM-VALUE
///
/// Backslash goes first so the backslashes introduced for `"` and `]`
/// are not escaped a second time.
pub fn escape_param_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace(']', "\\]")
}

/// A single `name="value"` pair inside an element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetadataParam {
    pub name: String,
    pub value: String,
}

impl MetadataParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for MetadataParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, escape_param_value(&self.value))
    }
}

/// Structured data element (SD-ELEMENT)
///
/// Parameters keep insertion order and may repeat a name.
///
/// # Example
///
/// ```
/// use rust_syslog_logger::Metadata;
///
/// let sd = Metadata::new("exampleSDID@32473")
///     .with_param("eventID", "1011")
///     .with_param("eventSource", "Application");
///
/// assert_eq!(
///     sd.to_string(),
///     r#"[exampleSDID@32473 eventID="1011" eventSource="Application"]"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Params", default)]
    pub params: Vec<MetadataParam>,
}

impl Metadata {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: Vec::new(),
        }
    }

    pub fn with_params<I>(id: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = MetadataParam>,
    {
        Self {
            id: id.into(),
            params: params.into_iter().collect(),
        }
    }

    /// Append a parameter
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(MetadataParam::new(name, value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.id)?;
        for param in &self.params {
            write!(f, " {}", param)?;
        }
        f.write_str("]")
    }
}
