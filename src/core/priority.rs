//! PRI part of a syslog message

use super::facility::Facility;
use super::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Facility and severity pair, rendered on the wire as `<code>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Priority {
    pub facility: Facility,
    pub severity: Severity,
}

impl Priority {
    #[inline]
    pub const fn new(facility: Facility, severity: Severity) -> Self {
        Self { facility, severity }
    }

    /// `facility * 8 + severity`; at most 23 * 8 + 7 = 191
    #[inline]
    pub fn code(&self) -> u8 {
        self.facility.code() * 8 + self.severity.code()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.code())
    }
}
