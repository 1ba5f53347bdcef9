// file: src/logger/sink.rs
// description: sink abstraction shared by console and rotating file output
// reference: internal module structure

use crate::error::Result;
use crate::logger::formatter::Record;
use crate::logger::level::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    RotatingFile,
}

/// A destination for formatted records. Implementations serialise their own
/// writes, so a sink may be shared across threads.
pub trait Sink: Send + Sync {
    fn kind(&self) -> SinkKind;

    fn threshold(&self) -> Level;

    /// Writes the record unconditionally; threshold filtering happens in
    /// [`Sink::handle`].
    fn emit(&self, record: &Record) -> Result<()>;

    fn handle(&self, record: &Record) -> Result<()> {
        if record.level >= self.threshold() {
            self.emit(record)
        } else {
            Ok(())
        }
    }
}
