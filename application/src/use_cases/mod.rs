//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod load_dashboard;
pub mod search_faqs;
#[cfg(test)]
pub(crate) mod test_support;
