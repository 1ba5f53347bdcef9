// file: src/logger/level.rs
// description: ordered severity levels with parsing and serde support
// reference: standard DEBUG < INFO < WARNING < ERROR < CRITICAL ladder

use crate::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record. Ordering follows the declaration order, so
/// `Level::Debug < Level::Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Level {
    #[default]
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    pub(crate) fn from_u8(value: u8) -> Level {
        match value {
            0..=10 => Level::Debug,
            11..=20 => Level::Info,
            21..=30 => Level::Warning,
            31..=40 => Level::Error,
            _ => Level::Critical,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARNING" | "WARN" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "CRITICAL" | "FATAL" => Ok(Level::Critical),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, LoggerError> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn test_parse_case_insensitive_and_aliases() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!(" Debug ".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("fatal".parse::<Level>().unwrap(), Level::Critical);
    }

    #[test]
    fn test_parse_unknown_level() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel(ref s) if s == "verbose"));
    }

    #[test]
    fn test_try_from_string() {
        assert_eq!(Level::try_from("error".to_string()).unwrap(), Level::Error);
        assert!(matches!(
            Level::try_from("nope".to_string()),
            Err(LoggerError::InvalidLevel(_))
        ));
        assert_eq!(String::from(Level::Critical), "CRITICAL");
    }

    #[test]
    fn test_u8_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_u8(level as u8), level);
        }
    }
}
