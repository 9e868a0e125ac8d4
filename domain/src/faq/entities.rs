//! FAQ record entity

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Stable identifier of an FAQ record (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaqId(u32);

impl FaqId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FaqId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FaqId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A frequently asked question together with how often it was asked (Entity)
///
/// # Example
///
/// ```
/// use faq_domain::Faq;
///
/// let faq = Faq::new(1, "Is there a dress code?", "Casual attire is recommended.", 58).unwrap();
/// assert_eq!(faq.frequency(), 58);
/// assert!(faq.matches("DRESS"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFaq")]
pub struct Faq {
    id: FaqId,
    question: String,
    answer: String,
    frequency: u32,
}

/// Wire shape of a record before validation
#[derive(Deserialize)]
struct RawFaq {
    id: FaqId,
    question: String,
    answer: String,
    frequency: u32,
}

impl TryFrom<RawFaq> for Faq {
    type Error = DomainError;

    fn try_from(raw: RawFaq) -> Result<Self, Self::Error> {
        Faq::new(raw.id, raw.question, raw.answer, raw.frequency)
    }
}

impl Faq {
    /// Create a record, rejecting blank question or answer text
    pub fn new(
        id: impl Into<FaqId>,
        question: impl Into<String>,
        answer: impl Into<String>,
        frequency: u32,
    ) -> Result<Self, DomainError> {
        let question = question.into();
        let answer = answer.into();
        if question.trim().is_empty() {
            return Err(DomainError::EmptyQuestion);
        }
        if answer.trim().is_empty() {
            return Err(DomainError::EmptyAnswer);
        }
        Ok(Self {
            id: id.into(),
            question,
            answer,
            frequency,
        })
    }

    pub fn id(&self) -> FaqId {
        self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Case-insensitive substring match against question or answer.
    ///
    /// An empty query matches every record.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.question.to_lowercase().contains(&needle)
            || self.answer.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food() -> Faq {
        Faq::new(
            4,
            "Will there be food provided?",
            "Yes, meals and snacks will be provided throughout the event.",
            201,
        )
        .unwrap()
    }

    #[test]
    fn test_faq_creation() {
        let faq = food();
        assert_eq!(faq.id(), FaqId::new(4));
        assert_eq!(faq.question(), "Will there be food provided?");
        assert_eq!(faq.frequency(), 201);
    }

    #[test]
    fn test_empty_question_rejected() {
        assert_eq!(
            Faq::new(1, "   ", "answer", 1).unwrap_err(),
            DomainError::EmptyQuestion
        );
    }

    #[test]
    fn test_deserialize_valid_record() {
        let faq: Faq = serde_json::from_str(
            r#"{"id":7,"question":"What are the prizes?","answer":"Cash.","frequency":225}"#,
        )
        .unwrap();
        assert_eq!(faq.id(), FaqId::new(7));
        assert_eq!(faq.frequency(), 225);
    }

    #[test]
    fn test_deserialize_rejects_blank_text() {
        let blank_question =
            serde_json::from_str::<Faq>(r#"{"id":1,"question":"","answer":"   ","frequency":3}"#);
        let err = blank_question.unwrap_err().to_string();
        assert!(err.contains("question cannot be empty"), "{err}");

        let blank_answer =
            serde_json::from_str::<Faq>(r#"{"id":1,"question":"Why?","answer":"  ","frequency":3}"#);
        assert!(blank_answer.is_err());
    }

    #[test]
    fn test_empty_answer_rejected() {
        assert_eq!(
            Faq::new(1, "question?", "", 1).unwrap_err(),
            DomainError::EmptyAnswer
        );
    }

    #[test]
    fn test_zero_frequency_allowed() {
        assert!(Faq::new(1, "q", "a", 0).is_ok());
    }

    #[test]
    fn test_matches_case_insensitive() {
        let faq = food();
        assert!(faq.matches("food"));
        assert!(faq.matches("FOOD"));
        assert!(faq.matches("Snacks"));
        assert!(!faq.matches("laptop"));
    }

    #[test]
    fn test_empty_query_matches() {
        assert!(food().matches(""));
    }

    #[test]
    fn test_id_serializes_transparently() {
        let json = serde_json::to_value(food()).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["frequency"], 201);
    }
}
