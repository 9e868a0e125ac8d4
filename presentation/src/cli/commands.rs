//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the dashboard is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Interactive terminal dashboard
    Tui,
    /// One-shot coloured text report
    Text,
    /// Snapshot as JSON
    Json,
}

impl From<OutputFormat> for faq_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Tui => faq_domain::OutputFormat::Tui,
            OutputFormat::Text => faq_domain::OutputFormat::Text,
            OutputFormat::Json => faq_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for faq-dashboard
#[derive(Parser, Debug)]
#[command(name = "faq-dashboard")]
#[command(author, version, about = "FAQ Analytics Dashboard - which questions get asked the most")]
#[command(long_about = r#"
FAQ Analytics Dashboard loads the FAQ collection, ranks it by how often each
question was asked and shows the distribution.

Output modes:
  tui   Interactive terminal dashboard (default)
  text  Coloured one-shot report
  json  The dashboard snapshot as JSON

Configuration files are loaded from (in priority order):
1. FAQ_DASHBOARD_<SECTION>__<KEY>   Environment variables
2. --config <path>                  Explicit config file
3. ./faq-dashboard.toml             Project-level config
4. ~/.config/faq-dashboard/config.toml   Global config

Example:
  faq-dashboard
  faq-dashboard -o text --page-size 5
  faq-dashboard -o json --fetch-delay-ms 0
"#)]
pub struct Cli {
    /// Output mode (defaults to the config file's [output] format, else tui)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Rows per table page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Simulated fetch latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub fetch_delay_ms: Option<u64>,

    /// Make the data provider fail (shows the error screen)
    #[arg(long)]
    pub simulate_failure: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective config, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Directory for the TUI log file
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
