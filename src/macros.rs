//! Logging macros taking a free-form list of payload values.
//!
//! Each value is converted with `PayloadValue::from`, so strings, integers,
//! floats and booleans can be mixed in one call. The macros evaluate to the
//! `Result<()>` of the underlying logger call.
//!
//! # Examples
//!
//! ```
//! use rust_syslog_logger::prelude::*;
//! use rust_syslog_logger::{informational, warning};
//!
//! let logger = Logger::builder().writer(MemoryWriter::new()).build();
//!
//! informational!(logger, "Server started").unwrap();
//! warning!(logger, "Retry attempt", 3, "of", 5).unwrap();
//! ```

/// Log payload values at an explicit severity.
///
/// # Examples
///
/// ```
/// # use rust_syslog_logger::prelude::*;
/// # let logger = Logger::builder().writer(MemoryWriter::new()).build();
/// use rust_syslog_logger::log;
/// log!(logger, Severity::Notice, "Simple message").unwrap();
/// log!(logger, Severity::Error, "Error code:", 500).unwrap();
/// log!(logger, Severity::Debug).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr $(, $value:expr)* $(,)?) => {{
        let payload: ::std::vec::Vec<$crate::PayloadValue> =
            ::std::vec![$($crate::PayloadValue::from($value)),*];
        $logger.log($severity, payload)
    }};
}

/// Log at emergency severity.
#[macro_export]
macro_rules! emergency {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Emergency $(, $value)*)
    };
}

/// Log at alert severity.
#[macro_export]
macro_rules! alert {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Alert $(, $value)*)
    };
}

/// Log at critical severity.
#[macro_export]
macro_rules! critical {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Critical $(, $value)*)
    };
}

/// Log at error severity.
///
/// # Examples
///
/// ```
/// # use rust_syslog_logger::prelude::*;
/// # let logger = Logger::builder().writer(MemoryWriter::new()).build();
/// use rust_syslog_logger::error;
/// error!(logger, "Failed to connect to database").unwrap();
/// error!(logger, "Error code:", 500, "fatal:", false).unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Error $(, $value)*)
    };
}

/// Log at warning severity.
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Warning $(, $value)*)
    };
}

/// Log at notice severity.
#[macro_export]
macro_rules! notice {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Notice $(, $value)*)
    };
}

/// Log at informational severity.
#[macro_export]
macro_rules! informational {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Informational $(, $value)*)
    };
}

/// Log at debug severity.
///
/// # Examples
///
/// ```
/// # use rust_syslog_logger::prelude::*;
/// # let logger = Logger::builder().writer(MemoryWriter::new()).build();
/// use rust_syslog_logger::debug;
/// debug!(logger, "Counter value:", 10, "ratio:", 0.5).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Debug $(, $value)*)
    };
}
