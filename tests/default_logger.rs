// file: tests/default_logger.rs
// description: default factory invocation writes app.log in the working directory
// reference: https://docs.rs/tempfile

use dn_base::{Level, LoggerConfig, LoggerRegistry};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_invocation() {
    let temp = TempDir::new().unwrap();
    std::env::set_current_dir(temp.path()).unwrap();

    let registry = LoggerRegistry::new();
    let logger = registry.get_default_logger("svc").unwrap();

    assert_eq!(logger.level(), Level::Debug);
    assert_eq!(logger.sink_count(), 2);

    let defaults = LoggerConfig::default();
    assert_eq!(defaults.log_file, PathBuf::from("app.log"));
    assert_eq!(defaults.max_bytes, 10 * 1024 * 1024);
    assert_eq!(defaults.backup_count, 5);

    logger.info("hello");

    let content = fs::read_to_string(temp.path().join("app.log")).unwrap();
    assert!(content.starts_with("INFO: "));
    assert!(content.trim_end().ends_with(" - hello"));
}
