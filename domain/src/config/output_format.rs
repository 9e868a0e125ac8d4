//! Output format value object

use serde::{Deserialize, Serialize};

/// How the dashboard is presented
///
/// This is a domain concept shared by the config file and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Interactive terminal dashboard (default)
    #[default]
    Tui,
    /// One-shot text report
    Text,
    /// Snapshot as JSON
    Json,
}

impl OutputFormat {
    /// Whether this format takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, OutputFormat::Tui)
    }
}
