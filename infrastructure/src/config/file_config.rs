//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use faq_application::DashboardParams;
use faq_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("dashboard.page_size cannot be 0")]
    InvalidPageSize,

    #[error("dashboard.chart_top_n cannot be 0")]
    InvalidChartSize,

    #[error("dashboard.label_max_chars must be at least 4 (got {0})")]
    LabelTooShort(usize),
}

/// Raw provider configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Simulated latency of a full fetch, in milliseconds
    pub fetch_delay_ms: u64,
    /// Simulated latency of a search, in milliseconds
    pub search_delay_ms: u64,
    /// Make every provider call fail (exercises the error screen)
    pub simulate_failure: bool,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: 500,
            search_delay_ms: 300,
            simulate_failure: false,
        }
    }
}

/// Raw dashboard layout configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDashboardConfig {
    pub chart_top_n: usize,
    pub top_questions: usize,
    pub page_size: usize,
    pub label_max_chars: usize,
}

impl Default for FileDashboardConfig {
    fn default() -> Self {
        let params = DashboardParams::default();
        Self {
            chart_top_n: params.chart_top_n,
            top_questions: params.top_questions,
            page_size: params.page_size,
            label_max_chars: params.label_max_chars,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output in text reports
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the TUI log file
    pub directory: Option<PathBuf>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub provider: FileProviderConfig,
    pub dashboard: FileDashboardConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.dashboard.page_size == 0 {
            return Err(ConfigValidationError::InvalidPageSize);
        }

        if self.dashboard.chart_top_n == 0 {
            return Err(ConfigValidationError::InvalidChartSize);
        }

        // room for at least one character plus "..."
        if self.dashboard.label_max_chars < 4 {
            return Err(ConfigValidationError::LabelTooShort(
                self.dashboard.label_max_chars,
            ));
        }

        Ok(())
    }

    /// Application-level dashboard parameters
    pub fn dashboard_params(&self) -> DashboardParams {
        DashboardParams::default()
            .with_chart_top_n(self.dashboard.chart_top_n)
            .with_top_questions(self.dashboard.top_questions)
            .with_page_size(self.dashboard.page_size)
            .with_label_max_chars(self.dashboard.label_max_chars)
    }

    /// Render the configuration as TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
