//! Logging setup
//!
//! Report modes log to stderr. The TUI owns the terminal, so it logs to
//! `faq-dashboard.log` through a non-blocking file writer instead.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "faq-dashboard.log";

/// Filter for a `-v` count (0 = warn, 1 = info, 2 = debug, 3+ = trace)
pub fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// Log directory for the TUI: CLI flag, then config, then the platform data dir
pub fn resolve_log_dir(cli_dir: Option<&Path>, config_dir: Option<&Path>) -> PathBuf {
    cli_dir
        .or(config_dir)
        .map(Path::to_path_buf)
        .or_else(|| dirs::data_local_dir().map(|d| d.join("faq-dashboard").join("logs")))
        .unwrap_or_else(|| std::env::temp_dir().join("faq-dashboard"))
}

/// Log to stderr (report modes)
pub fn init_stderr(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Log to a file in `dir` (TUI mode)
///
/// The returned guard flushes pending lines on drop and must live until exit.
pub fn init_file(verbose: u8, dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(guard)
}
