//! Application-level configuration.
//!
//! - [`DashboardParams`] - how many records each dashboard section shows

pub mod dashboard_params;

pub use dashboard_params::DashboardParams;
