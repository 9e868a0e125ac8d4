//! Test doubles shared by the use case tests

use crate::ports::faq_provider::{FaqProvider, ProviderError};
use crate::ports::progress::LoadProgressNotifier;
use async_trait::async_trait;
use faq_domain::Faq;
use std::sync::Mutex;

pub(crate) fn faq(id: u32, question: &str, answer: &str, frequency: u32) -> Faq {
    Faq::new(id, question, answer, frequency).unwrap()
}

/// Provider returning canned records (in the given order) or an error
pub(crate) struct StubProvider {
    records: Vec<Faq>,
    error: Option<ProviderError>,
}

impl StubProvider {
    pub(crate) fn with_records(records: Vec<Faq>) -> Self {
        Self {
            records,
            error: None,
        }
    }

    pub(crate) fn failing(error: ProviderError) -> Self {
        Self {
            records: Vec::new(),
            error: Some(error),
        }
    }
}

#[async_trait]
impl FaqProvider for StubProvider {
    async fn fetch_all(&self) -> Result<Vec<Faq>, ProviderError> {
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(self.records.clone()),
        }
    }

    async fn search(&self, query: &str) -> Result<Vec<Faq>, ProviderError> {
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(self
                .records
                .iter()
                .filter(|faq| faq.matches(query))
                .cloned()
                .collect()),
        }
    }
}

/// Progress notifier that records every callback
#[derive(Default)]
pub(crate) struct RecordingProgress {
    pub(crate) events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl LoadProgressNotifier for RecordingProgress {
    fn on_fetch_start(&self) {
        self.events.lock().unwrap().push("start".into());
    }

    fn on_fetch_complete(&self, record_count: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("complete:{record_count}"));
    }

    fn on_fetch_failed(&self, message: &str) {
        self.events.lock().unwrap().push(format!("failed:{message}"));
    }
}
