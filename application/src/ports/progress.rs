//! Progress notification port
//!
//! Defines the interface for reporting progress while the dashboard loads.

/// Callback for progress updates during a dashboard load
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, TUI, etc.)
pub trait LoadProgressNotifier: Send + Sync {
    /// Called right before the provider is asked for records
    fn on_fetch_start(&self);

    /// Called when records arrived and the snapshot was built
    fn on_fetch_complete(&self, record_count: usize);

    /// Called when the load failed, with the user-facing message
    fn on_fetch_failed(&self, message: &str);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl LoadProgressNotifier for NoProgress {
    fn on_fetch_start(&self) {}
    fn on_fetch_complete(&self, _record_count: usize) {}
    fn on_fetch_failed(&self, _message: &str) {}
}
