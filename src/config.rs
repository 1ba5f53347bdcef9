// file: src/config.rs
// description: logger configuration with toml file and environment overrides
// reference: https://docs.rs/config

use crate::error::{LoggerError, Result};
use crate::logger::console::ConsoleTarget;
use crate::logger::level::Level;
use crate::utils::validation::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE: &str = "app.log";
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;
pub const DEFAULT_BACKUP_COUNT: u32 = 5;
pub const ENV_PREFIX: &str = "DN_BASE";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub logger: LoggerConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: Level,
    pub log_file: PathBuf,
    pub max_bytes: u64,
    pub backup_count: u32,
    pub console_colors: bool,
    pub file_colors: bool,
    pub console_target: ConsoleTarget,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Debug,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            max_bytes: DEFAULT_MAX_BYTES,
            backup_count: DEFAULT_BACKUP_COUNT,
            console_colors: true,
            file_colors: false,
            console_target: ConsoleTarget::Stderr,
        }
    }
}

impl LoggerConfig {
    /// Loads `[logger]` from `path` (or `config/default.toml` when present),
    /// then applies `DN_BASE__LOGGER__*` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| LoggerError::Config(e.to_string()))?;

        let settings: Settings = settings
            .try_deserialize()
            .map_err(|e| LoggerError::Config(e.to_string()))?;

        settings.logger.validate()?;
        Ok(settings.logger)
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn with_backup_count(mut self, backup_count: u32) -> Self {
        self.backup_count = backup_count;
        self
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_max_bytes(self.max_bytes)?;

        if self.log_file.as_os_str().is_empty() {
            return Err(LoggerError::Config("log_file must not be empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();

        assert_eq!(config.level, Level::Debug);
        assert_eq!(config.log_file, PathBuf::from("app.log"));
        assert_eq!(config.max_bytes, 10_485_760);
        assert_eq!(config.backup_count, 5);
        assert!(config.console_colors);
        assert!(!config.file_colors);
    }

    #[test]
    fn test_builder_methods() {
        let config = LoggerConfig::default()
            .with_level(Level::Warning)
            .with_log_file("svc.log")
            .with_max_bytes(2048)
            .with_backup_count(1);

        assert_eq!(config.level, Level::Warning);
        assert_eq!(config.log_file, PathBuf::from("svc.log"));
        assert_eq!(config.max_bytes, 2048);
        assert_eq!(config.backup_count, 1);
    }

    #[test]
    fn test_validate_rejects_zero_max_bytes() {
        let config = LoggerConfig::default().with_max_bytes(0);
        assert!(matches!(config.validate(), Err(LoggerError::InvalidMaxBytes)));
    }

    #[test]
    fn test_load_from_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logging.toml");
        fs::write(
            &path,
            r#"
[logger]
level = "warn"
log_file = "service.log"
max_bytes = 4096
backup_count = 2
file_colors = true
console_target = "stdout"
"#,
        )
        .unwrap();

        let config = LoggerConfig::load(Some(&path)).unwrap();

        assert_eq!(config.level, Level::Warning);
        assert_eq!(config.log_file, PathBuf::from("service.log"));
        assert_eq!(config.max_bytes, 4096);
        assert_eq!(config.backup_count, 2);
        assert!(config.file_colors);
        assert!(config.console_colors);
        assert_eq!(config.console_target, ConsoleTarget::Stdout);
    }

    #[test]
    fn test_load_rejects_unknown_level() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logging.toml");
        fs::write(&path, "[logger]\nlevel = \"loud\"\n").unwrap();

        assert!(matches!(
            LoggerConfig::load(Some(&path)),
            Err(LoggerError::Config(_))
        ));
    }

    #[test]
    fn test_load_rejects_zero_max_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logging.toml");
        fs::write(&path, "[logger]\nmax_bytes = 0\n").unwrap();

        assert!(matches!(
            LoggerConfig::load(Some(&path)),
            Err(LoggerError::InvalidMaxBytes)
        ));
    }
}
