// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use dn_base::logger::rotating_file::backup_path;
use dn_base::utils::logging::{format_log_file, format_status, init_logger};
use dn_base::{Level, LoggerConfig, LoggerRegistry, PackageInfo, Validator};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "dn_base")]
#[command(author = "Markus Stuppnig")]
#[command(version)]
#[command(about = "Colored console and size-rotated file logging", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure a logger and emit a single record
    Emit {
        #[arg(short, long, default_value = "dn_base")]
        name: String,

        #[arg(short, long, default_value = "INFO")]
        level: Level,

        #[arg(long, value_name = "FILE")]
        log_file: Option<PathBuf>,

        message: String,
    },

    /// Write many records to exercise file rotation
    Stress {
        #[arg(short, long, default_value = "stress")]
        name: String,

        #[arg(long, default_value_t = 1000)]
        count: usize,

        #[arg(short, long, default_value_t = 128)]
        size: usize,

        #[arg(long, value_name = "BYTES")]
        max_bytes: Option<u64>,

        #[arg(long, value_name = "NUM")]
        backup_count: Option<u32>,
    },

    /// Show package metadata and the effective logger configuration
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Emit {
            name,
            level,
            log_file,
            message,
        } => {
            cmd_emit(config, &name, level, log_file, &message)?;
        }
        Commands::Stress {
            name,
            count,
            size,
            max_bytes,
            backup_count,
        } => {
            cmd_stress(config, &name, count, size, max_bytes, backup_count)?;
        }
        Commands::Info => {
            cmd_info(&config);
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<LoggerConfig> {
    info!("Loading configuration from: {}", path.display());

    if path.exists() {
        return LoggerConfig::load(Some(path)).context("Failed to load configuration");
    }

    warn!(
        "Config file {} not found, using default configuration",
        path.display()
    );
    LoggerConfig::load(None).context("Failed to load configuration")
}

fn cmd_emit(
    mut config: LoggerConfig,
    name: &str,
    level: Level,
    log_file: Option<PathBuf>,
    message: &str,
) -> Result<()> {
    if let Some(log_file) = log_file {
        config = config.with_log_file(log_file);
    }

    let registry = LoggerRegistry::new();
    let logger = registry
        .get_logger(name, &config)
        .with_context(|| format!("Failed to configure logger '{}'", name))?;

    logger
        .try_log(level, message)
        .context("Failed to write log record")?;

    Ok(())
}

fn cmd_stress(
    mut config: LoggerConfig,
    name: &str,
    count: usize,
    size: usize,
    max_bytes: Option<u64>,
    backup_count: Option<u32>,
) -> Result<()> {
    if let Some(max_bytes) = max_bytes {
        config = config.with_max_bytes(max_bytes);
    }
    if let Some(backup_count) = backup_count {
        config = config.with_backup_count(backup_count);
    }

    let registry = LoggerRegistry::new();
    let logger = registry
        .get_logger(name, &config)
        .with_context(|| format!("Failed to configure logger '{}'", name))?;

    let payload = "x".repeat(size);
    let start_time = Instant::now();

    for i in 0..count {
        let level = Level::ALL[i % Level::ALL.len()];
        logger
            .try_log(level, format!("{:>6} {}", i, payload))
            .context("Failed to write log record")?;
    }

    eprintln!(
        "{}",
        format_status(
            true,
            &format!(
                "Wrote {} records in {:.2}s",
                count,
                start_time.elapsed().as_secs_f64()
            )
        )
    );

    let mut files = vec![config.log_file.clone()];
    files.extend((1..=config.backup_count).map(|i| backup_path(&config.log_file, i)));

    for path in files.into_iter().filter(|p| p.exists()) {
        let size = std::fs::metadata(&path)
            .with_context(|| format!("Cannot stat {}", path.display()))?
            .len();
        eprintln!("{}", format_log_file(&path, size));
    }

    Ok(())
}

fn cmd_info(config: &LoggerConfig) {
    print!("{}", info_report(config));

    if let Err(e) = Validator::validate_log_directory(&config.log_file) {
        eprintln!("{}", format_status(false, &e.to_string()));
    }
}

fn info_report(config: &LoggerConfig) -> String {
    let package = PackageInfo::current();

    let mut report = format!("{}\n{}\n\n", package.summary(), package.description);
    report.push_str("Logger configuration:\n");
    report.push_str(&format!("  level:          {}\n", config.level));
    report.push_str(&format!("  log_file:       {}\n", config.log_file.display()));
    report.push_str(&format!("  max_bytes:      {}\n", config.max_bytes));
    report.push_str(&format!("  backup_count:   {}\n", config.backup_count));
    report.push_str(&format!("  console_colors: {}\n", config.console_colors));
    report.push_str(&format!("  file_colors:    {}\n", config.file_colors));
    report.push_str(&format!("  console_target: {:?}\n", config.console_target));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_stress_flags_parse() {
        let cli = Cli::try_parse_from(["dn_base", "stress", "-n", "svc", "--count", "5"]).unwrap();

        match cli.command {
            Commands::Stress { name, count, .. } => {
                assert_eq!(name, "svc");
                assert_eq!(count, 5);
            }
            _ => panic!("expected stress command"),
        }
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "[logger]\nmax_bytes = 0\n").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_missing_config_file_still_reports_env_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.toml");

        // Only this test touches the environment in the binary's test suite.
        unsafe { std::env::set_var("DN_BASE__LOGGER__MAX_BYTES", "0") };
        let result = load_config(&missing);
        unsafe { std::env::remove_var("DN_BASE__LOGGER__MAX_BYTES") };

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("max_bytes"));
    }

    #[test]
    fn test_info_report_lists_package_and_config() {
        let config = LoggerConfig::default().with_backup_count(3);
        let report = info_report(&config);

        assert!(report.starts_with("dn_base "));
        assert!(report.contains("backup_count:   3"));
        assert!(!report.contains("Dependencies"));
    }
}
