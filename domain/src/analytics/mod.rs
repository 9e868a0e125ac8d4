//! Aggregation and view model.
//!
//! Everything here is a pure function of a record collection:
//!
//! - [`aggregate`] - totals, top-N and percentage shares
//! - [`snapshot::DashboardSnapshot`] - the figures one dashboard render needs
//! - [`table::TableView`] - sorting and paging of the ranked table

pub mod aggregate;
pub mod snapshot;
pub mod table;
