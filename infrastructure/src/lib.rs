//! Infrastructure layer for faq-dashboard
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod provider;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, ENV_PREFIX, FileConfig, FileDashboardConfig, FileLoggingConfig,
    FileOutputConfig, FileProviderConfig,
};
pub use provider::{InMemoryFaqProvider, seed_faqs};
