//! Presentation layer for faq-dashboard
//!
//! This crate contains CLI definitions, the interactive terminal
//! dashboard, text/JSON report formatters and progress reporters.

pub mod cli;
pub mod format;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use tui::{LoadState, TuiApp, TuiState};
