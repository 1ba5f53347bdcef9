// file: src/logger/console.rs
// description: console sink writing formatted records to stderr or stdout
// reference: std::io stream handles guarded by a mutex

use crate::error::Result;
use crate::logger::formatter::{ColorFormatter, Record};
use crate::logger::level::Level;
use crate::logger::sink::{Sink, SinkKind};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    #[default]
    Stderr,
    Stdout,
}

pub struct ConsoleSink {
    threshold: Level,
    formatter: ColorFormatter,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn new(target: ConsoleTarget, threshold: Level, formatter: ColorFormatter) -> Self {
        let writer: Box<dyn Write + Send> = match target {
            ConsoleTarget::Stderr => Box::new(io::stderr()),
            ConsoleTarget::Stdout => Box::new(io::stdout()),
        };
        Self::with_writer(writer, threshold, formatter)
    }

    /// Builds a console sink over an arbitrary writer, used to capture output.
    pub fn with_writer(
        writer: Box<dyn Write + Send>,
        threshold: Level,
        formatter: ColorFormatter,
    ) -> Self {
        Self {
            threshold,
            formatter,
            writer: Mutex::new(writer),
        }
    }

    pub fn formatter(&self) -> ColorFormatter {
        self.formatter
    }
}

impl Sink for ConsoleSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn threshold(&self) -> Level {
        self.threshold
    }

    fn emit(&self, record: &Record) -> Result<()> {
        let line = self.formatter.format(record);
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}
