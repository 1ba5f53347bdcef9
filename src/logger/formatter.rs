// file: src/logger/formatter.rs
// description: log record type and the colorizing line formatter
// reference: https://docs.rs/colored for terminal color codes

use crate::logger::level::Level;
use chrono::{DateTime, Local};
use colored::Color;

const RESET: &str = "\x1b[0m";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// A single log event as handed to every sink.
#[derive(Debug, Clone)]
pub struct Record {
    pub level: Level,
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub logger: String,
}

impl Record {
    pub fn new(logger: &str, level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            message: message.into(),
            logger: logger.to_string(),
        }
    }
}

/// Renders records as `LEVEL: TIMESTAMP - MESSAGE`, optionally wrapping the
/// level name in an ANSI color sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorFormatter {
    colored: bool,
}

impl ColorFormatter {
    pub fn new() -> Self {
        Self { colored: true }
    }

    pub fn plain() -> Self {
        Self { colored: false }
    }

    pub fn with_colors(colored: bool) -> Self {
        Self { colored }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Escape sequence opening the level label, e.g. `\x1b[32m` for INFO.
    pub fn level_style(level: Level) -> String {
        let (color, bold) = match level {
            Level::Debug => (Color::Blue, false),
            Level::Info => (Color::Green, false),
            Level::Warning => (Color::Yellow, false),
            Level::Error => (Color::Red, false),
            Level::Critical => (Color::BrightRed, true),
        };

        if bold {
            format!("\x1b[{}m\x1b[1m", color.to_fg_str())
        } else {
            format!("\x1b[{}m", color.to_fg_str())
        }
    }

    pub fn level_text(&self, level: Level) -> String {
        if self.colored {
            format!("{}{}{}", Self::level_style(level), level.as_str(), RESET)
        } else {
            level.as_str().to_string()
        }
    }

    pub fn format(&self, record: &Record) -> String {
        format!(
            "{}: {} - {}",
            self.level_text(record.level),
            record.timestamp.format(TIMESTAMP_FORMAT),
            record.message
        )
    }
}

impl Default for ColorFormatter {
    fn default() -> Self {
        Self::new()
    }
}
