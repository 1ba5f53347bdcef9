// file: src/logger/mod.rs
// description: logger module exports
// reference: internal module structure

pub mod console;
pub mod formatter;
pub mod handle;
pub mod level;
pub mod registry;
pub mod rotating_file;
pub mod sink;

#[cfg(test)]
pub(crate) mod testing;

pub use console::{ConsoleSink, ConsoleTarget};
pub use formatter::{ColorFormatter, Record};
pub use handle::{Logger, SinkState};
pub use level::Level;
pub use registry::LoggerRegistry;
pub use rotating_file::RotatingFileSink;
pub use sink::{Sink, SinkKind};
