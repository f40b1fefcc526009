//! Syslog severity definitions (RFC5424 §6.2.1, table 2)

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message urgency, `Emergency` (0) being the most urgent.
///
/// Ordering follows the numeric code, so `Severity::Error < Severity::Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Informational = 6,
    Debug = 7,
}

impl Severity {
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Informational,
        Severity::Debug,
    ];

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Emergency => "emergency",
            Severity::Alert => "alert",
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Informational => "informational",
            Severity::Debug => "debug",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Emergency | Severity::Alert => BrightRed,
            Severity::Critical | Severity::Error => Red,
            Severity::Warning => Yellow,
            Severity::Notice => Cyan,
            Severity::Informational => Green,
            Severity::Debug => Blue,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.code()
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    // `Self::Error` would be ambiguous with `Severity::Error`
    fn try_from(code: u8) -> Result<Self, LoggerError> {
        Severity::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(LoggerError::InvalidSeverity(code))
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emergency" | "emerg" => Ok(Severity::Emergency),
            "alert" => Ok(Severity::Alert),
            "critical" | "crit" => Ok(Severity::Critical),
            "error" | "err" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "notice" => Ok(Severity::Notice),
            "informational" | "info" => Ok(Severity::Informational),
            "debug" => Ok(Severity::Debug),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Severity::Emergency.code(), 0);
        assert_eq!(Severity::Alert.code(), 1);
        assert_eq!(Severity::Critical.code(), 2);
        assert_eq!(Severity::Error.code(), 3);
        assert_eq!(Severity::Warning.code(), 4);
        assert_eq!(Severity::Notice.code(), 5);
        assert_eq!(Severity::Informational.code(), 6);
        assert_eq!(Severity::Debug.code(), 7);
    }

    #[test]
    fn test_try_from_code() {
        for severity in Severity::ALL {
            assert_eq!(Severity::try_from(severity.code()).unwrap(), severity);
        }
        assert!(matches!(
            Severity::try_from(8),
            Err(LoggerError::InvalidSeverity(8))
        ));
    }

    #[test]
    fn test_try_from_error_type() {
        fn decode<T: TryFrom<u8, Error = LoggerError>>(code: u8) -> Result<T, LoggerError> {
            T::try_from(code)
        }

        assert_eq!(decode::<Severity>(3).unwrap(), Severity::Error);
        let err = decode::<Severity>(200).unwrap_err();
        assert_eq!(err.to_string(), "Invalid severity code: 200");
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("EMERG".parse::<Severity>(), Ok(Severity::Emergency));
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("Informational".parse::<Severity>(), Ok(Severity::Informational));
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn test_json_is_numeric() {
        assert_eq!(serde_json::to_string(&Severity::Notice).unwrap(), "5");
        assert_eq!(serde_json::from_str::<Severity>("3").unwrap(), Severity::Error);
        assert!(serde_json::from_str::<Severity>("9").is_err());
    }
}
