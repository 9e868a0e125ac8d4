//! Application layer for faq-dashboard
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DashboardParams;
pub use ports::{
    faq_provider::{FaqProvider, ProviderError},
    progress::{LoadProgressNotifier, NoProgress},
};
pub use use_cases::load_dashboard::{
    FETCH_FAILED_MESSAGE, LoadDashboardError, LoadDashboardUseCase,
};
pub use use_cases::search_faqs::{SearchFaqsError, SearchFaqsUseCase};
