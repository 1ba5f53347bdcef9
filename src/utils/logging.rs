// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored status helpers
// reference: https://docs.rs/tracing-subscriber

use colored::*;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the diagnostics subscriber for the crate's own `tracing` events.
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(colored_output);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Stderr line used when a logger could not hand a record to one of its sinks.
pub fn format_sink_failure(logger: &str, err: &dyn std::fmt::Display) -> String {
    format!(
        "{} {} {}",
        "✗".red().bold(),
        format!("[{}]", logger).red().bold(),
        format!("dropped record: {}", err).red()
    )
}

/// One-line outcome for CLI commands: green check or yellow warning sign.
pub fn format_status(ok: bool, msg: &str) -> String {
    if ok {
        format!("{} {}", "✓".green().bold(), msg.green())
    } else {
        format!("{} {}", "⚠".yellow().bold(), msg.yellow())
    }
}

/// Lists a log file (active or backup) with its size, for rotation reports.
pub fn format_log_file(path: &Path, bytes: u64) -> String {
    format!(
        "  {} {} {}",
        "•".cyan(),
        path.display(),
        format!("({} bytes)", bytes).dimmed()
    )
}
