//! In-memory FAQ provider with simulated latency
//!
//! Stands in for a remote FAQ service. Each call sleeps for a configured
//! delay before answering from a fixed record list, so the dashboard's
//! loading state is exercised the same way a network call would.

use super::seed::seed_faqs;
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use faq_application::{FaqProvider, ProviderError};
use faq_domain::Faq;
use std::time::Duration;
use tracing::{debug, warn};

/// Default latency of [`FaqProvider::fetch_all`]
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(500);

/// Default latency of [`FaqProvider::search`]
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(300);

/// Mock FAQ source over a fixed record list.
///
/// # Examples
///
/// ```
/// use faq_infrastructure::InMemoryFaqProvider;
/// use std::time::Duration;
///
/// let provider = InMemoryFaqProvider::seeded().with_fetch_delay(Duration::ZERO);
/// assert_eq!(provider.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryFaqProvider {
    records: Vec<Faq>,
    fetch_delay: Duration,
    search_delay: Duration,
    failure: Option<String>,
}

impl InMemoryFaqProvider {
    /// Provider over `records`, kept in the given (insertion) order
    pub fn new(records: Vec<Faq>) -> Self {
        Self {
            records,
            fetch_delay: DEFAULT_FETCH_DELAY,
            search_delay: DEFAULT_SEARCH_DELAY,
            failure: None,
        }
    }

    /// Provider over the built-in dataset
    pub fn seeded() -> Self {
        Self::new(seed_faqs())
    }

    /// Seeded provider tuned by the `[provider]` config section
    pub fn from_config(config: &FileProviderConfig) -> Self {
        let provider = Self::seeded()
            .with_fetch_delay(Duration::from_millis(config.fetch_delay_ms))
            .with_search_delay(Duration::from_millis(config.search_delay_ms));
        if config.simulate_failure {
            provider.with_failure("simulated failure (provider.simulate_failure)")
        } else {
            provider
        }
    }

    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    /// Make every call fail with [`ProviderError::Unavailable`]
    pub fn with_failure(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    async fn simulate_latency(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn check_failure(&self) -> Result<(), ProviderError> {
        match &self.failure {
            Some(reason) => {
                warn!("In-memory provider failing on purpose: {}", reason);
                Err(ProviderError::Unavailable(reason.clone()))
            }
            None => Ok(()),
        }
    }
}

impl Default for InMemoryFaqProvider {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl FaqProvider for InMemoryFaqProvider {
    async fn fetch_all(&self) -> Result<Vec<Faq>, ProviderError> {
        Self::simulate_latency(self.fetch_delay).await;
        self.check_failure()?;

        let mut records = self.records.clone();
        // stable: equal frequencies keep insertion order
        records.sort_by(|a, b| b.frequency().cmp(&a.frequency()));
        debug!("fetch_all returning {} records", records.len());
        Ok(records)
    }

    async fn search(&self, query: &str) -> Result<Vec<Faq>, ProviderError> {
        Self::simulate_latency(self.search_delay).await;
        self.check_failure()?;

        let matches: Vec<Faq> = self
            .records
            .iter()
            .filter(|faq| faq.matches(query))
            .cloned()
            .collect();
        debug!("search {:?} matched {} records", query, matches.len());
        Ok(matches)
    }
}
