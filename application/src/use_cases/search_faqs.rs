//! Search FAQs use case
//!
//! Text filter over the provider's records. Not used by any dashboard
//! surface yet.

use crate::ports::faq_provider::{FaqProvider, ProviderError};
use faq_domain::{DomainError, FaqCollection};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SearchFaqsError {
    #[error("Search failed: {0}")]
    SearchFailed(#[from] ProviderError),

    #[error("Invalid FAQ data: {0}")]
    InvalidData(#[from] DomainError),
}

/// Use case for filtering FAQs by text
pub struct SearchFaqsUseCase<P: FaqProvider + 'static> {
    provider: Arc<P>,
}

impl<P: FaqProvider + 'static> SearchFaqsUseCase<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Records matching `query` (case-insensitive), in source order
    pub async fn execute(&self, query: &str) -> Result<FaqCollection, SearchFaqsError> {
        let records = self.provider.search(query).await?;
        debug!("Search {:?} matched {} records", query, records.len());
        Ok(FaqCollection::new(records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{StubProvider, faq};

    fn provider() -> Arc<StubProvider> {
        Arc::new(StubProvider::with_records(vec![
            faq(1, "Will there be food provided?", "Meals and snacks.", 201),
            faq(2, "Is there a dress code?", "Casual attire.", 58),
            faq(3, "What should I bring?", "Bring a water bottle.", 178),
        ]))
    }

    #[tokio::test]
    async fn test_search_matches_answers_too() {
        let result = SearchFaqsUseCase::new(provider()).execute("water").await.unwrap();
        let ids: Vec<u32> = result.iter().map(|f| f.id().value()).collect();
        assert_eq!(ids, vec![3]);
    }

    #[tokio::test]
    async fn test_search_failure_propagates() {
        let use_case = SearchFaqsUseCase::new(Arc::new(StubProvider::failing(
            ProviderError::Timeout,
        )));
        assert!(matches!(
            use_case.execute("food").await,
            Err(SearchFaqsError::SearchFailed(ProviderError::Timeout))
        ));
    }
}
