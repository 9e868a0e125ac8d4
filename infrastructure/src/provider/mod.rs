//! FAQ provider adapters
//!
//! - [`InMemoryFaqProvider`] - mock provider over a fixed record list with
//!   simulated latency
//! - [`seed_faqs`] - the built-in hackathon FAQ dataset

mod in_memory;
mod seed;

pub use in_memory::InMemoryFaqProvider;
pub use seed::seed_faqs;
