// file: src/logger/handle.rs
// description: named logger handle with threshold and attached sinks
// reference: internal module structure

use crate::error::{LoggerError, Result};
use crate::logger::formatter::Record;
use crate::logger::level::Level;
use crate::logger::sink::{Sink, SinkKind};
use crate::utils::logging::format_sink_failure;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Sinks are attached exactly once; a configured logger never goes back.
pub enum SinkState {
    Unconfigured,
    Configured(Vec<Box<dyn Sink>>),
}

impl SinkState {
    pub fn is_configured(&self) -> bool {
        matches!(self, SinkState::Configured(_))
    }
}

pub struct Logger {
    name: String,
    level: AtomicU8,
    sinks: Mutex<SinkState>,
}

impl Logger {
    pub(crate) fn new(name: &str, level: Level) -> Self {
        Self {
            name: name.to_string(),
            level: AtomicU8::new(level as u8),
            sinks: Mutex::new(SinkState::Unconfigured),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.level()
    }

    pub fn is_configured(&self) -> bool {
        self.state().is_configured()
    }

    pub fn sink_count(&self) -> usize {
        match &*self.state() {
            SinkState::Unconfigured => 0,
            SinkState::Configured(sinks) => sinks.len(),
        }
    }

    pub fn sink_kinds(&self) -> Vec<SinkKind> {
        match &*self.state() {
            SinkState::Unconfigured => Vec::new(),
            SinkState::Configured(sinks) => sinks.iter().map(|s| s.kind()).collect(),
        }
    }

    /// Attaches `build()`'s sinks unless the logger is already configured.
    /// Returns whether sinks were attached. The builder runs under the state
    /// lock, so concurrent callers for the same name attach at most once.
    pub(crate) fn configure_once<F>(&self, build: F) -> Result<bool>
    where
        F: FnOnce() -> Result<Vec<Box<dyn Sink>>>,
    {
        let mut state = self.state();
        if state.is_configured() {
            return Ok(false);
        }
        *state = SinkState::Configured(build()?);
        Ok(true)
    }

    /// Dispatches the message to every sink, returning the first failure after
    /// all sinks have been tried.
    pub fn try_log(&self, level: Level, message: impl Into<String>) -> Result<()> {
        if !self.is_enabled_for(level) {
            return Ok(());
        }

        let record = Record::new(&self.name, level, message);
        let state = self.state();
        let SinkState::Configured(sinks) = &*state else {
            return Ok(());
        };

        let mut first_error: Option<LoggerError> = None;
        for sink in sinks {
            if let Err(err) = sink.handle(&record) {
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Like [`Logger::try_log`], but sink failures are reported on stderr and
    /// otherwise ignored.
    pub fn log(&self, level: Level, message: impl Into<String>) {
        if let Err(err) = self.try_log(level, message) {
            eprintln!("{}", format_sink_failure(&self.name, &err));
        }
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    pub fn critical(&self, message: impl Into<String>) {
        self.log(Level::Critical, message);
    }

    fn state(&self) -> MutexGuard<'_, SinkState> {
        self.sinks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("sinks", &self.sink_kinds())
            .finish()
    }
}
