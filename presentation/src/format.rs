//! Pure formatting helpers shared by the TUI and the text report
//!
//! None of these render anything; they turn numbers and text into the
//! labels the dashboard shows.

use faq_domain::truncate;
use ratatui::style::Color;

/// Slice colours of the distribution chart, cycled by slice index
pub const PALETTE: [Color; 5] = [
    Color::Rgb(33, 150, 243), // blue
    Color::Rgb(0, 200, 83),   // green
    Color::Rgb(255, 179, 0),  // amber
    Color::Rgb(233, 30, 99),  // pink
    Color::Rgb(103, 58, 183), // purple
];

/// Chart label: at most `max_chars` characters followed by "..." when cut
pub fn truncate_label(question: &str, max_chars: usize) -> String {
    truncate(question, max_chars)
}

/// `20` -> `"20%"`
pub fn percent_label(share: u32) -> String {
    format!("{share}%")
}

/// Chip shown next to a top question, e.g. `"225 (20%)"`
pub fn chip_label(frequency: u32, share: u32) -> String {
    format!("{frequency} ({})", percent_label(share))
}

/// Detail text for a highlighted record: full question, then its frequency
pub fn frequency_tooltip(question: &str, frequency: u32) -> String {
    format!("{question}\nFrequency: {frequency}")
}

pub fn slice_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// `1` -> `"#1"`
pub fn rank_label(rank: usize) -> String {
    format!("#{rank}")
}
