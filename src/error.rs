// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Logger name must not be empty")]
    InvalidName,

    #[error("Unknown log level: {0}")]
    InvalidLevel(String),

    #[error("max_bytes must be greater than 0")]
    InvalidMaxBytes,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot open log file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Log rotation failed for {path}: {source}")]
    Rotation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
