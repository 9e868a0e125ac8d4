//! CLI entrypoint for faq-dashboard
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use faq_application::{LoadDashboardUseCase, LoadProgressNotifier, NoProgress};
use faq_domain::OutputFormat;
use faq_infrastructure::{ConfigLoader, FileConfig, InMemoryFaqProvider};
use faq_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress, TuiApp};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;

    if cli.show_config {
        println!("{}\n", ConfigLoader::describe_sources(cli.config.as_deref()));
        println!("Effective configuration:\n");
        print!("{}", config.to_toml().context("failed to render configuration")?);
        return Ok(ExitCode::SUCCESS);
    }

    let format = output_format(&cli, &config);

    // Initialize logging; the TUI must not write to the terminal it draws on
    let _log_guard = if format.is_interactive() {
        let dir = logging::resolve_log_dir(
            cli.log_dir.as_deref(),
            config.logging.directory.as_deref(),
        );
        Some(logging::init_file(cli.verbose, &dir)?)
    } else {
        logging::init_stderr(cli.verbose);
        None
    };

    info!("Starting faq-dashboard");
    debug!(?format, ?config, "Effective configuration");

    ConsoleFormatter::set_color(config.output.color);

    // === Dependency Injection ===
    let provider = Arc::new(InMemoryFaqProvider::from_config(&config.provider));
    let params = config.dashboard_params();

    if format.is_interactive() {
        let mut app = TuiApp::new(provider, params);
        app.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    let use_case = LoadDashboardUseCase::new(provider);
    let progress: Box<dyn LoadProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    match use_case.execute_with_progress(progress.as_ref()).await {
        Ok(snapshot) => {
            let output = match format {
                OutputFormat::Json => ConsoleFormatter::format_json(&snapshot),
                _ => ConsoleFormatter::format(&snapshot, &params),
            };
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_error(e.user_message()));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Load, override and validate the configuration
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?
    };

    apply_cli_overrides(&mut config, cli);
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// CLI flags take precedence over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(page_size) = cli.page_size {
        config.dashboard.page_size = page_size;
    }
    if let Some(delay) = cli.fetch_delay_ms {
        config.provider.fetch_delay_ms = delay;
    }
    if cli.simulate_failure {
        config.provider.simulate_failure = true;
    }
    if let Some(dir) = &cli.log_dir {
        config.logging.directory = Some(dir.clone());
    }
}

fn output_format(cli: &Cli, config: &FileConfig) -> OutputFormat {
    cli.output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["faq-dashboard"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = parse(&[
            "--page-size",
            "3",
            "--fetch-delay-ms",
            "0",
            "--simulate-failure",
            "--log-dir",
            "/tmp/faq-logs",
        ]);
        let mut config = FileConfig::default();
        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.dashboard.page_size, 3);
        assert_eq!(config.provider.fetch_delay_ms, 0);
        assert!(config.provider.simulate_failure);
        assert_eq!(config.logging.directory, Some(PathBuf::from("/tmp/faq-logs")));
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = parse(&[]);
        let mut config = FileConfig::default();
        config.provider.simulate_failure = true;
        apply_cli_overrides(&mut config, &cli);
        assert_eq!(config.dashboard.page_size, 10);
        assert!(config.provider.simulate_failure);
    }

    #[test]
    fn test_output_format_priority() {
        let mut config = FileConfig::default();
        assert_eq!(output_format(&parse(&[]), &config), OutputFormat::Tui);

        config.output.format = Some(OutputFormat::Text);
        assert_eq!(output_format(&parse(&[]), &config), OutputFormat::Text);
        assert_eq!(output_format(&parse(&["-o", "json"]), &config), OutputFormat::Json);
    }

    #[test]
    fn test_load_config_rejects_zero_page_size() {
        let cli = parse(&["--no-config", "--page-size", "0"]);
        assert!(load_config(&cli).is_err());
    }

    #[test]
    fn test_load_config_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(&path, "[dashboard]\nchart_top_n = 3\n\n[output]\nformat = \"json\"\n")
            .unwrap();

        let cli = parse(&["--config", path.to_str().unwrap(), "--page-size", "4"]);
        let config = load_config(&cli).unwrap();

        assert_eq!(config.dashboard.chart_top_n, 3);
        assert_eq!(config.dashboard.page_size, 4);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_load_config_missing_explicit_file() {
        let cli = parse(&["--config", "/nonexistent/faq-dashboard.toml"]);
        assert!(load_config(&cli).is_err());
    }
}
