//! HEADER part of a syslog message
//!
//! `<PRI>VERSION TIMESTAMP HOSTNAME APP-NAME PROCID MSGID`

use super::optional::Optional;
use super::priority::Priority;
use super::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares an opaque string header field whose text is its content.
macro_rules! string_field {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_field!(
    /// HOSTNAME field
    HostName
);
string_field!(
    /// APP-NAME field
    AppName
);
string_field!(
    /// PROCID field
    ProcessID
);
string_field!(
    /// MSGID field
    MessageID
);

/// Syslog protocol version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(pub u8);

impl Version {
    pub const V1: Version = Version(1);
}

impl Default for Version {
    fn default() -> Self {
        Version::V1
    }
}

impl From<u8> for Version {
    fn from(version: u8) -> Self {
        Version(version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(rename = "Priority")]
    pub priority: Priority,
    #[serde(rename = "Version")]
    pub version: Version,
    #[serde(rename = "Timestamp", default)]
    pub timestamp: Optional<Timestamp>,
    #[serde(rename = "HostName", default)]
    pub host_name: Optional<HostName>,
    #[serde(rename = "AppName", default)]
    pub app_name: Optional<AppName>,
    #[serde(rename = "ProcessID", default)]
    pub process_id: Optional<ProcessID>,
    #[serde(rename = "MessageID", default)]
    pub message_id: Optional<MessageID>,
}

impl Header {
    pub fn new(
        priority: Priority,
        version: Version,
        timestamp: Optional<Timestamp>,
        host_name: Optional<HostName>,
        app_name: Optional<AppName>,
        process_id: Optional<ProcessID>,
        message_id: Optional<MessageID>,
    ) -> Self {
        Self {
            priority,
            version,
            timestamp,
            host_name,
            app_name,
            process_id,
            message_id,
        }
    }

    /// Header with every optional field absent
    pub fn minimal(priority: Priority, version: Version) -> Self {
        Self::new(
            priority,
            version,
            Optional::absent(),
            Optional::absent(),
            Optional::absent(),
            Optional::absent(),
            Optional::absent(),
        )
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<Timestamp>) -> Self {
        self.timestamp = Optional::present(timestamp.into());
        self
    }

    #[must_use]
    pub fn with_host_name(mut self, host_name: impl Into<HostName>) -> Self {
        self.host_name = Optional::present(host_name.into());
        self
    }

    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<AppName>) -> Self {
        self.app_name = Optional::present(app_name.into());
        self
    }

    #[must_use]
    pub fn with_process_id(mut self, process_id: impl Into<ProcessID>) -> Self {
        self.process_id = Optional::present(process_id.into());
        self
    }

    #[must_use]
    pub fn with_message_id(mut self, message_id: impl Into<MessageID>) -> Self {
        self.message_id = Optional::present(message_id.into());
        self
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {} {} {} {} {}",
            self.priority,
            self.version,
            self.timestamp.placeholder(),
            self.host_name.placeholder(),
            self.app_name.placeholder(),
            self.process_id.placeholder(),
            self.message_id.placeholder(),
        )
    }
}
