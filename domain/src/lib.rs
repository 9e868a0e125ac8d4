//! Domain layer for faq-dashboard
//!
//! This crate contains the FAQ entities and the pure analytics that turn a
//! record collection into dashboard figures. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## FAQ record
//!
//! A question/answer pair with a frequency counter. Records are produced
//! wholesale by a data provider and never edited.
//!
//! ## Aggregation
//!
//! - **Total frequency**: sum of all counters, the denominator for every share
//! - **Top-N**: the first N records of a collection sorted by frequency
//! - **Percentage share**: a record's frequency relative to the total,
//!   rounded half-up, zero when the total is zero

pub mod analytics;
pub mod config;
pub mod core;
pub mod faq;

// Re-export commonly used types
pub use analytics::{
    aggregate::{most_asked, percentage_share, share_ratio, top_n, total_frequency},
    snapshot::{ChartSlice, DashboardSnapshot, RankedFaq},
    table::{SortColumn, SortDirection, TablePage, TableView},
};
pub use config::OutputFormat;
pub use core::{error::DomainError, string::truncate};
pub use faq::{
    collection::FaqCollection,
    entities::{Faq, FaqId},
};
