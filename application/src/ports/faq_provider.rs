//! FAQ provider port
//!
//! Defines the interface for fetching FAQ records. The in-memory mock in the
//! infrastructure layer implements it today; an HTTP client would implement
//! the same contract.

use async_trait::async_trait;
use faq_domain::Faq;
use thiserror::Error;

/// Errors that can occur while talking to an FAQ source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("FAQ source unavailable: {0}")]
    Unavailable(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed FAQ data: {0}")]
    Malformed(String),
}

/// Source of FAQ records
///
/// Failures are reported only through the returned `Result`; implementations
/// must not panic.
#[async_trait]
pub trait FaqProvider: Send + Sync {
    /// Every record, sorted by descending frequency.
    ///
    /// Records with equal frequency keep their source order.
    async fn fetch_all(&self) -> Result<Vec<Faq>, ProviderError>;

    /// Records whose question or answer contains `query`, ignoring case.
    ///
    /// An empty query matches everything. Results keep source order.
    async fn search(&self, query: &str) -> Result<Vec<Faq>, ProviderError>;
}
