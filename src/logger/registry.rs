// file: src/logger/registry.rs
// description: caller-owned registry that hands out configured loggers by name
// reference: idempotent console plus rotating file wiring

use crate::config::LoggerConfig;
use crate::error::Result;
use crate::logger::console::ConsoleSink;
use crate::logger::formatter::ColorFormatter;
use crate::logger::handle::Logger;
use crate::logger::rotating_file::RotatingFileSink;
use crate::logger::sink::Sink;
use crate::utils::validation::Validator;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

#[derive(Default)]
pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the logger registered under `name`, creating it if needed, and
    /// sets its threshold to `config.level`.
    ///
    /// The first successful call attaches a console sink and a rotating file
    /// sink built from `config`. Later calls for the same name only update the
    /// logger threshold; their remaining settings are ignored.
    pub fn get_logger(&self, name: &str, config: &LoggerConfig) -> Result<Arc<Logger>> {
        Validator::validate_logger_name(name)?;
        config.validate()?;

        let logger = {
            let mut loggers = self.loggers();
            Arc::clone(
                loggers
                    .entry(name.to_string())
                    .or_insert_with(|| Arc::new(Logger::new(name, config.level))),
            )
        };
        logger.set_level(config.level);

        let attached = logger.configure_once(|| build_sinks(config))?;
        if attached {
            debug!(
                "Logger '{}' writing to console and {} (level {}, {} bytes x {} backups)",
                name,
                config.log_file.display(),
                config.level,
                config.max_bytes,
                config.backup_count
            );
        } else {
            debug!("Logger '{}' already configured, updated level to {}", name, config.level);
        }

        Ok(logger)
    }

    /// `get_logger` with the default configuration: DEBUG, `app.log`,
    /// 10 MiB per file, 5 backups.
    pub fn get_default_logger(&self, name: &str) -> Result<Arc<Logger>> {
        self.get_logger(name, &LoggerConfig::default())
    }

    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers().get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers().is_empty()
    }

    fn loggers(&self) -> MutexGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn build_sinks(config: &LoggerConfig) -> Result<Vec<Box<dyn Sink>>> {
    let file = RotatingFileSink::new(
        &config.log_file,
        config.max_bytes,
        config.backup_count,
        config.level,
        ColorFormatter::with_colors(config.file_colors),
    )?;
    let console = ConsoleSink::new(
        config.console_target,
        config.level,
        ColorFormatter::with_colors(config.console_colors),
    );

    Ok(vec![Box::new(console), Box::new(file)])
}
