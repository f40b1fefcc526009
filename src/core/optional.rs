//! Presence-or-absence container for header and metadata fields
//!
//! `Optional<T>` distinguishes "no value" from every value of `T`, including
//! empty strings and zeroes. It has three renderings:
//!
//! - `Display`: `Some(<value>)` / `None`, for diagnostics
//! - JSON: the value's own encoding / `null`
//! - [`Optional::placeholder`]: the value's text / `-`, as used on the wire

use super::error::{LoggerError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// RFC5424 placeholder for an absent field
pub const NIL_VALUE: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    Present(T),
    Absent,
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> Optional<T> {
    #[inline]
    pub fn present(value: T) -> Self {
        Optional::Present(value)
    }

    #[inline]
    pub fn absent() -> Self {
        Optional::Absent
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    /// Borrow the contained value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Wire rendering: the value's own text, or `-` when absent
    ///
    /// ```
    /// use rust_syslog_logger::Optional;
    ///
    /// assert_eq!(Optional::present("host").placeholder().to_string(), "host");
    /// assert_eq!(Optional::<&str>::absent().placeholder().to_string(), "-");
    /// ```
    pub fn placeholder(&self) -> Placeholder<'_, T> {
        Placeholder(self)
    }
}

impl<T: Serialize> Optional<T> {
    /// Encode as JSON; absent values encode as `null`
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(LoggerError::Encoding)
    }
}

impl<T: DeserializeOwned> Optional<T> {
    /// Decode from JSON; `null` decodes as absent
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(LoggerError::Decoding)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(value) => write!(f, "Some({})", value),
            Optional::Absent => f.write_str("None"),
        }
    }
}

/// `Display` adapter returned by [`Optional::placeholder`]
#[derive(Debug, Clone, Copy)]
pub struct Placeholder<'a, T>(&'a Optional<T>);

impl<T: fmt::Display> fmt::Display for Placeholder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Optional::Present(value) => fmt::Display::fmt(value, f),
            Optional::Absent => f.write_str(NIL_VALUE),
        }
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Optional::Present(value) => serializer.serialize_some(value),
            Optional::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}
