//! Configuration file loading for faq-dashboard
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `FAQ_DASHBOARD_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./faq-dashboard.toml` or `./.faq-dashboard.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/faq-dashboard/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDashboardConfig, FileLoggingConfig, FileOutputConfig,
    FileProviderConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
