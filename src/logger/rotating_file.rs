// file: src/logger/rotating_file.rs
// description: file sink that rolls over to numbered backups once a size limit is reached
// reference: size-based rotation with base.1 .. base.N backups, newest first

use crate::error::{LoggerError, Result};
use crate::logger::formatter::{ColorFormatter, Record};
use crate::logger::level::Level;
use crate::logger::sink::{Sink, SinkKind};
use crate::utils::validation::Validator;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

struct FileState {
    file: Option<File>,
    size: u64,
}

pub struct RotatingFileSink {
    path: PathBuf,
    max_bytes: u64,
    backup_count: u32,
    threshold: Level,
    formatter: ColorFormatter,
    state: Mutex<FileState>,
}

impl RotatingFileSink {
    /// Opens (or creates) `path` in append mode. Fails when `max_bytes` is zero
    /// or the file cannot be opened.
    pub fn new(
        path: impl Into<PathBuf>,
        max_bytes: u64,
        backup_count: u32,
        threshold: Level,
        formatter: ColorFormatter,
    ) -> Result<Self> {
        Validator::validate_max_bytes(max_bytes)?;

        let path = path.into();
        let file = open_append(&path)?;
        let size = file
            .metadata()
            .map_err(|source| LoggerError::FileOpen {
                path: path.clone(),
                source,
            })?
            .len();

        Ok(Self {
            path,
            max_bytes,
            backup_count,
            threshold,
            formatter,
            state: Mutex::new(FileState {
                file: Some(file),
                size,
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    pub fn backup_count(&self) -> u32 {
        self.backup_count
    }

    pub fn formatter(&self) -> ColorFormatter {
        self.formatter
    }

    pub fn backup_path(&self, index: u32) -> PathBuf {
        backup_path(&self.path, index)
    }

    fn should_rollover(&self, size: u64, incoming: u64) -> bool {
        // Zero backups disables rotation entirely, and an empty file is never
        // rotated even if a single record exceeds the limit.
        if self.backup_count == 0 || size == 0 {
            return false;
        }
        if size + incoming < self.max_bytes {
            return false;
        }
        !(self.path.exists() && !self.path.is_file())
    }

    fn rollover(&self, state: &mut FileState) -> Result<()> {
        if let Some(mut file) = state.file.take() {
            file.flush()?;
        }

        let shifted = self.shift_backups();

        let file = open_append(&self.path)?;
        state.size = file.metadata()?.len();
        state.file = Some(file);

        debug!(
            "Rotated log file {} (keeping {} backups)",
            self.path.display(),
            self.backup_count
        );

        shifted
    }

    fn shift_backups(&self) -> Result<()> {
        let rotation_err = |path: &Path, source| LoggerError::Rotation {
            path: path.to_path_buf(),
            source,
        };

        for index in (1..self.backup_count).rev() {
            let source = self.backup_path(index);
            let target = self.backup_path(index + 1);
            if source.exists() {
                if target.exists() {
                    fs::remove_file(&target).map_err(|e| rotation_err(&target, e))?;
                }
                fs::rename(&source, &target).map_err(|e| rotation_err(&source, e))?;
            }
        }

        let first = self.backup_path(1);
        if first.exists() {
            fs::remove_file(&first).map_err(|e| rotation_err(&first, e))?;
        }
        if self.path.exists() {
            fs::rename(&self.path, &first).map_err(|e| rotation_err(&self.path, e))?;
        }

        Ok(())
    }
}

impl Sink for RotatingFileSink {
    fn kind(&self) -> SinkKind {
        SinkKind::RotatingFile
    }

    fn threshold(&self) -> Level {
        self.threshold
    }

    fn emit(&self, record: &Record) -> Result<()> {
        let mut line = self.formatter.format(record);
        line.push('\n');
        let incoming = line.len() as u64;

        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if self.should_rollover(state.size, incoming) {
            self.rollover(&mut state)?;
        }

        if state.file.is_none() {
            let file = open_append(&self.path)?;
            state.size = file.metadata()?.len();
            state.file = Some(file);
        }

        if let Some(file) = state.file.as_mut() {
            file.write_all(line.as_bytes())?;
            file.flush()?;
        }
        state.size += incoming;

        Ok(())
    }
}

/// Path of the `index`-th backup of `path`, e.g. `app.log.2`.
pub fn backup_path(path: &Path, index: u32) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{}", index));
    PathBuf::from(name)
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggerError::FileOpen {
            path: path.to_path_buf(),
            source,
        })
}
