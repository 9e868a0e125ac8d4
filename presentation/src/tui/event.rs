//! TUI event types
//!
//! Events coming FROM background tasks into the UI loop.

use faq_domain::DashboardSnapshot;

/// Events delivered to the TUI loop over its channel
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// A dashboard load finished; the error carries the user-facing message
    Loaded(Result<DashboardSnapshot, String>),
}
