//! Domain error types

use crate::faq::entities::FaqId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("FAQ question cannot be empty")]
    EmptyQuestion,

    #[error("FAQ answer cannot be empty")]
    EmptyAnswer,

    #[error("Duplicate FAQ id: {0}")]
    DuplicateId(FaqId),
}
