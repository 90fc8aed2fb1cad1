use std::str::FromStr;

use crate::types::errors::ParseLevelError;

/// Log severity, ordered from most verbose to most severe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        };
        f.write_str(label)
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Matches level names case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level: LogLevel = match s.to_ascii_uppercase().as_str() {
            "TRACE" => LogLevel::Trace,
            "DEBUG" => LogLevel::Debug,
            "INFO" => LogLevel::Info,
            "WARN" => LogLevel::Warn,
            "ERROR" => LogLevel::Error,
            "FATAL" => LogLevel::Fatal,
            _ => {
                return Err(ParseLevelError {
                    name: s.to_string(),
                });
            }
        };
        Ok(level)
    }
}
