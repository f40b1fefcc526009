//! Syslog facility definitions (RFC5424 §6.2.1, table 1)

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subsystem that produced a message. Names follow the Linux conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Facility {
    Kernel = 0,
    User = 1,
    Mail = 2,
    Daemon = 3,
    Auth = 4,
    Syslog = 5,
    Lpr = 6,
    News = 7,
    Uucp = 8,
    Cron = 9,
    AuthPriv = 10,
    Ftp = 11,
    Ntp = 12,
    Audit = 13,
    Alert = 14,
    ClockDaemon = 15,
    Local0 = 16,
    Local1 = 17,
    Local2 = 18,
    Local3 = 19,
    Local4 = 20,
    Local5 = 21,
    Local6 = 22,
    Local7 = 23,
}

impl Facility {
    pub const ALL: [Facility; 24] = [
        Facility::Kernel,
        Facility::User,
        Facility::Mail,
        Facility::Daemon,
        Facility::Auth,
        Facility::Syslog,
        Facility::Lpr,
        Facility::News,
        Facility::Uucp,
        Facility::Cron,
        Facility::AuthPriv,
        Facility::Ftp,
        Facility::Ntp,
        Facility::Audit,
        Facility::Alert,
        Facility::ClockDaemon,
        Facility::Local0,
        Facility::Local1,
        Facility::Local2,
        Facility::Local3,
        Facility::Local4,
        Facility::Local5,
        Facility::Local6,
        Facility::Local7,
    ];

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Facility::Kernel => "kern",
            Facility::User => "user",
            Facility::Mail => "mail",
            Facility::Daemon => "daemon",
            Facility::Auth => "auth",
            Facility::Syslog => "syslog",
            Facility::Lpr => "lpr",
            Facility::News => "news",
            Facility::Uucp => "uucp",
            Facility::Cron => "cron",
            Facility::AuthPriv => "authpriv",
            Facility::Ftp => "ftp",
            Facility::Ntp => "ntp",
            Facility::Audit => "audit",
            Facility::Alert => "alert",
            Facility::ClockDaemon => "clockd",
            Facility::Local0 => "local0",
            Facility::Local1 => "local1",
            Facility::Local2 => "local2",
            Facility::Local3 => "local3",
            Facility::Local4 => "local4",
            Facility::Local5 => "local5",
            Facility::Local6 => "local6",
            Facility::Local7 => "local7",
        }
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Facility> for u8 {
    fn from(facility: Facility) -> Self {
        facility.code()
    }
}

impl TryFrom<u8> for Facility {
    type Error = LoggerError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Facility::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(LoggerError::InvalidFacility(code))
    }
}

impl FromStr for Facility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Facility::ALL
            .iter()
            .copied()
            .find(|facility| facility.as_str() == lower)
            .ok_or_else(|| format!("Invalid facility: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_table() {
        for (code, facility) in Facility::ALL.iter().enumerate() {
            assert_eq!(usize::from(facility.code()), code);
        }
        assert_eq!(Facility::Kernel.code(), 0);
        assert_eq!(Facility::User.code(), 1);
        assert_eq!(Facility::ClockDaemon.code(), 15);
        assert_eq!(Facility::Local4.code(), 20);
        assert_eq!(Facility::Local7.code(), 23);
    }

    #[test]
    fn test_try_from_code() {
        assert_eq!(Facility::try_from(9).unwrap(), Facility::Cron);
        assert!(matches!(
            Facility::try_from(24),
            Err(LoggerError::InvalidFacility(24))
        ));
    }

    #[test]
    fn test_names() {
        assert_eq!(Facility::Kernel.as_str(), "kern");
        assert_eq!(Facility::Local4.to_string(), "local4");
        assert_eq!("LOCAL4".parse::<Facility>(), Ok(Facility::Local4));
        assert!("local8".parse::<Facility>().is_err());
    }
}
