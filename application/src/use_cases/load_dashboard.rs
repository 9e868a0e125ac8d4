//! Load Dashboard use case
//!
//! Fetches every FAQ record once and turns it into a [`DashboardSnapshot`].

use crate::ports::faq_provider::{FaqProvider, ProviderError};
use crate::ports::progress::{LoadProgressNotifier, NoProgress};
use faq_domain::{DashboardSnapshot, DomainError, FaqCollection};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// The only message a user ever sees when loading fails
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load FAQs. Please try again later.";

/// Errors that can occur while loading the dashboard
///
/// The variants exist for diagnostics only: every one of them is shown to
/// the user as [`FETCH_FAILED_MESSAGE`].
#[derive(Error, Debug)]
pub enum LoadDashboardError {
    #[error("Fetch failed: {0}")]
    FetchFailed(#[from] ProviderError),

    #[error("Invalid FAQ data: {0}")]
    InvalidData(#[from] DomainError),
}

impl LoadDashboardError {
    /// User-facing message, identical for every cause
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// Use case for loading the dashboard snapshot
pub struct LoadDashboardUseCase<P: FaqProvider + 'static> {
    provider: Arc<P>,
}

impl<P: FaqProvider + 'static> LoadDashboardUseCase<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self) -> Result<DashboardSnapshot, LoadDashboardError> {
        self.execute_with_progress(&NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<DashboardSnapshot, LoadDashboardError> {
        info!("Loading FAQ dashboard");
        progress.on_fetch_start();

        match self.load().await {
            Ok(snapshot) => {
                info!(
                    questions = snapshot.total_questions,
                    inquiries = snapshot.total_frequency,
                    "FAQ dashboard loaded"
                );
                progress.on_fetch_complete(snapshot.total_questions);
                Ok(snapshot)
            }
            Err(e) => {
                error!("Error loading FAQs: {}", e);
                progress.on_fetch_failed(e.user_message());
                Err(e)
            }
        }
    }

    async fn load(&self) -> Result<DashboardSnapshot, LoadDashboardError> {
        let records = self.provider.fetch_all().await?;
        debug!("Provider returned {} records", records.len());

        // Stable: an already sorted provider result keeps its tie order
        let collection = FaqCollection::new(records)?.sorted_by_frequency();
        Ok(DashboardSnapshot::from_collection(&collection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{RecordingProgress, StubProvider, faq};

    fn seed() -> Vec<faq_domain::Faq> {
        [156, 142, 89, 201, 178, 58, 225, 104]
            .iter()
            .enumerate()
            .map(|(i, f)| faq(i as u32 + 1, &format!("Question {}", i + 1), "Answer", *f))
            .collect()
    }

    #[tokio::test]
    async fn test_execute_builds_snapshot() {
        let use_case = LoadDashboardUseCase::new(Arc::new(StubProvider::with_records(seed())));
        let snapshot = use_case.execute().await.unwrap();

        assert_eq!(snapshot.total_questions, 8);
        assert_eq!(snapshot.total_frequency, 1153);
        let most_asked = snapshot.most_asked().unwrap();
        assert_eq!(most_asked.faq.frequency(), 225);
        assert_eq!(most_asked.share, 20);
    }

    #[tokio::test]
    async fn test_unsorted_provider_output_is_ranked() {
        let use_case = LoadDashboardUseCase::new(Arc::new(StubProvider::with_records(seed())));
        let snapshot = use_case.execute().await.unwrap();
        let frequencies: Vec<u32> = snapshot.ranked.iter().map(|r| r.faq.frequency()).collect();
        assert_eq!(frequencies, vec![225, 201, 178, 156, 142, 104, 89, 58]);
    }

    #[tokio::test]
    async fn test_provider_failure_coalesced() {
        let use_case = LoadDashboardUseCase::new(Arc::new(StubProvider::failing(
            ProviderError::Timeout,
        )));
        let error = use_case.execute().await.unwrap_err();

        assert!(matches!(error, LoadDashboardError::FetchFailed(ProviderError::Timeout)));
        assert_eq!(error.user_message(), FETCH_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_a_failed_fetch() {
        let records = vec![faq(1, "a", "a", 1), faq(1, "b", "b", 2)];
        let use_case = LoadDashboardUseCase::new(Arc::new(StubProvider::with_records(records)));
        let error = use_case.execute().await.unwrap_err();

        assert!(matches!(error, LoadDashboardError::InvalidData(_)));
        assert_eq!(error.user_message(), FETCH_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_empty_provider_yields_empty_snapshot() {
        let use_case = LoadDashboardUseCase::new(Arc::new(StubProvider::with_records(vec![])));
        let snapshot = use_case.execute().await.unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.total_frequency, 0);
    }

    #[tokio::test]
    async fn test_progress_callbacks_on_success() {
        let progress = RecordingProgress::default();
        let use_case = LoadDashboardUseCase::new(Arc::new(StubProvider::with_records(seed())));
        use_case.execute_with_progress(&progress).await.unwrap();
        assert_eq!(progress.events(), vec!["start", "complete:8"]);
    }

    #[tokio::test]
    async fn test_progress_callbacks_on_failure() {
        let progress = RecordingProgress::default();
        let use_case = LoadDashboardUseCase::new(Arc::new(StubProvider::failing(
            ProviderError::Unavailable("offline".into()),
        )));
        let _ = use_case.execute_with_progress(&progress).await;
        assert_eq!(
            progress.events(),
            vec!["start".to_string(), format!("failed:{FETCH_FAILED_MESSAGE}")]
        );
    }
}
