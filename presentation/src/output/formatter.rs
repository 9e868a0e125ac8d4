//! Output formatter trait

use faq_application::DashboardParams;
use faq_domain::DashboardSnapshot;

/// Trait for formatting a loaded dashboard as a one-shot report
pub trait OutputFormatter {
    /// Format every dashboard section as text
    fn format(&self, snapshot: &DashboardSnapshot, params: &DashboardParams) -> String;

    /// Format as JSON
    fn format_json(&self, snapshot: &DashboardSnapshot) -> String;

    /// Format the message shown when loading failed
    fn format_error(&self, message: &str) -> String;
}
