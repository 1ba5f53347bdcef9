// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod logger;
pub mod package;
pub mod utils;

pub use config::{LoggerConfig, Settings};
pub use error::{LoggerError, Result};
pub use logger::{
    ColorFormatter, ConsoleSink, ConsoleTarget, Level, Logger, LoggerRegistry, Record,
    RotatingFileSink, Sink, SinkKind, SinkState,
};
pub use package::PackageInfo;
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = LoggerConfig::default();
        let _registry = LoggerRegistry::new();
        let _formatter = ColorFormatter::default();
    }
}
