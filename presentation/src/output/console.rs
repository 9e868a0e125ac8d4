//! Console output formatter for dashboard reports

use crate::format::{chip_label, percent_label, rank_label, truncate_label};
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use faq_application::DashboardParams;
use faq_domain::{DashboardSnapshot, share_ratio};

const EMPTY_MESSAGE: &str = "No FAQs available at this time.";
const SUBTITLE: &str =
    "Real-time analysis of frequently asked questions and their distribution";
const BAR_WIDTH: u64 = 20;

/// Formats dashboard snapshots for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete dashboard report
    pub fn format(snapshot: &DashboardSnapshot, params: &DashboardParams) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("FAQ Analytics Dashboard"));
        output.push('\n');
        output.push_str(&format!("{}\n", SUBTITLE.dimmed()));

        if snapshot.is_empty() {
            output.push_str(&format!("\n{}\n", EMPTY_MESSAGE.yellow()));
            output.push_str(&Self::footer());
            return output;
        }

        // Summary cards
        output.push_str(&Self::section_header("Summary"));
        output.push_str(&format!(
            "  {} {}\n",
            "Total Questions:".cyan().bold(),
            snapshot.total_questions
        ));
        output.push_str(&format!(
            "  {} {}\n",
            "Total Inquiries:".cyan().bold(),
            snapshot.total_frequency
        ));
        if let Some(most_asked) = snapshot.most_asked() {
            output.push_str(&format!(
                "  {} {} ({})\n",
                "Most Asked:".cyan().bold(),
                most_asked.faq.question(),
                most_asked.faq.frequency()
            ));
        }

        // Distribution chart
        output.push_str(&Self::section_header("Question Distribution Analysis"));
        let slices = snapshot.chart_slices(params.chart_top_n);
        let max_value = slices.iter().map(|s| s.value).max().unwrap_or(0);
        let label_width = params.label_max_chars + 3;
        for slice in &slices {
            let label = truncate_label(&slice.question, params.label_max_chars);
            output.push_str(&format!(
                "  {:<width$} {} {:>5} {:>5}\n",
                label,
                Self::bar(slice.value, max_value).blue(),
                slice.value,
                percent_label(slice.share),
                width = label_width
            ));
        }

        // Top questions with progress bars
        output.push_str(&Self::section_header("Top Questions"));
        for row in snapshot.top(params.top_questions) {
            output.push_str(&format!(
                "  {} {}  {}\n",
                rank_label(row.rank).yellow().bold(),
                row.faq.question(),
                chip_label(row.faq.frequency(), row.share).green()
            ));
            output.push_str(&format!(
                "     [{}]\n",
                Self::progress(share_ratio(row.faq.frequency(), snapshot.total_frequency))
            ));
        }

        // Full table
        output.push_str(&Self::section_header("All Questions"));
        output.push_str(&format!(
            "  {:<5} {:>9} {:>10}  {}\n",
            "Rank".bold(),
            "Frequency".bold(),
            "Percentage".bold(),
            "Question / Answer".bold()
        ));
        for row in &snapshot.ranked {
            output.push_str(&format!(
                "  {:<5} {:>9} {:>10}  {}\n",
                row.rank,
                row.faq.frequency(),
                percent_label(row.share),
                row.faq.question()
            ));
            output.push_str(&format!(
                "  {:<27}{}\n",
                "",
                row.faq.answer().dimmed()
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Loaded at".dimmed(),
            snapshot.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Globally enable or disable ANSI colours in formatted output
    pub fn set_color(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// Format as JSON
    pub fn format_json(snapshot: &DashboardSnapshot) -> String {
        serde_json::to_string_pretty(snapshot).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the load failure message
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Horizontal bar scaled so the largest value fills the full width
    fn bar(value: u32, max_value: u32) -> String {
        if max_value == 0 {
            return String::new();
        }
        let filled = (u64::from(value) * BAR_WIDTH + u64::from(max_value) / 2) / u64::from(max_value);
        format!("{:<width$}", "█".repeat(filled as usize), width = BAR_WIDTH as usize)
    }

    /// Progress track for a ratio in `[0, 1]`
    fn progress(ratio: f64) -> String {
        let filled = (ratio * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH as usize);
        format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH as usize - filled)
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, snapshot: &DashboardSnapshot, params: &DashboardParams) -> String {
        Self::format(snapshot, params)
    }

    fn format_json(&self, snapshot: &DashboardSnapshot) -> String {
        Self::format_json(snapshot)
    }

    fn format_error(&self, message: &str) -> String {
        Self::format_error(message)
    }
}
