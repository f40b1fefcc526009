//! TIMESTAMP field of a syslog header
//!
//! Wire form is RFC 3339 in UTC with a `Z` suffix. Fractional seconds are
//! written only when non-zero, up to nanoseconds with trailing zeros
//! trimmed, so whole seconds render as `2023-02-15T12:31:56Z` and half a
//! second past as `2023-02-15T12:31:56.5Z`. JSON uses the same string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::SystemTime;

/// Wall-clock instant of a message
///
/// # Examples
///
/// ```
/// use rust_syslog_logger::Timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Timestamp::from(Utc.with_ymd_and_hms(2023, 2, 15, 12, 31, 56).unwrap());
/// assert_eq!(ts.to_string(), "2023-02-15T12:31:56Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Sample the current wall-clock time
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// RFC 3339 rendering used on the wire
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        let mut text = self.0.format("%Y-%m-%dT%H:%M:%S").to_string();

        // leap seconds carry an extra second in the nanosecond field
        let nanos = self.0.timestamp_subsec_nanos() % 1_000_000_000;
        if nanos > 0 {
            let digits = format!("{:09}", nanos);
            text.push('.');
            text.push_str(digits.trim_end_matches('0'));
        }

        text.push('Z');
        text
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DateTime::<Utc>::deserialize(deserializer).map(Self)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Self(time.into())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}
