// file: src/utils/validation.rs
// description: input validation for logger names and log file locations
// reference: input validation patterns

use crate::error::{LoggerError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_logger_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidName);
        }
        Ok(())
    }

    pub fn validate_max_bytes(max_bytes: u64) -> Result<()> {
        if max_bytes == 0 {
            return Err(LoggerError::InvalidMaxBytes);
        }
        Ok(())
    }

    /// Checks that the directory holding `log_file` exists. A bare file name
    /// refers to the current directory.
    pub fn validate_log_directory(log_file: &Path) -> Result<()> {
        let dir = match log_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        if !dir.is_dir() {
            return Err(LoggerError::Config(format!(
                "Log directory does not exist: {}",
                dir.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_logger_name() {
        assert!(Validator::validate_logger_name("svc").is_ok());
        assert!(Validator::validate_logger_name("").is_err());
        assert!(Validator::validate_logger_name("   ").is_err());
    }

    #[test]
    fn test_validate_max_bytes() {
        assert!(Validator::validate_max_bytes(1).is_ok());
        assert!(matches!(
            Validator::validate_max_bytes(0),
            Err(LoggerError::InvalidMaxBytes)
        ));
    }

    #[test]
    fn test_validate_log_directory() {
        let temp = TempDir::new().unwrap();

        assert!(Validator::validate_log_directory(&temp.path().join("app.log")).is_ok());
        assert!(Validator::validate_log_directory(Path::new("app.log")).is_ok());
        assert!(Validator::validate_log_directory(&temp.path().join("missing/app.log")).is_err());
    }
}
