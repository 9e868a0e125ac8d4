//! Dashboard parameters - section sizes and label limits.
//!
//! These are presentation-independent knobs: both the TUI and the text
//! report read them when deriving their sections from a snapshot.

use serde::{Deserialize, Serialize};

/// Section sizes for a dashboard render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardParams {
    /// Records shown in the proportional chart.
    pub chart_top_n: usize,
    /// Records shown in the "Top Questions" progress view.
    pub top_questions: usize,
    /// Rows per table page.
    pub page_size: usize,
    /// Maximum characters of a chart label before it is truncated.
    pub label_max_chars: usize,
}

impl Default for DashboardParams {
    fn default() -> Self {
        Self {
            chart_top_n: 5,
            top_questions: 3,
            page_size: 10,
            label_max_chars: 30,
        }
    }
}

impl DashboardParams {
    // ==================== Builder Methods ====================

    pub fn with_chart_top_n(mut self, n: usize) -> Self {
        self.chart_top_n = n;
        self
    }

    pub fn with_top_questions(mut self, n: usize) -> Self {
        self.top_questions = n;
        self
    }

    /// Set the table page size (minimum 1)
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    pub fn with_label_max_chars(mut self, max: usize) -> Self {
        self.label_max_chars = max;
        self
    }
}
