//! Aggregate figures over a record collection

use crate::faq::entities::Faq;

/// Sum of all frequencies
pub fn total_frequency(records: &[Faq]) -> u64 {
    records.iter().map(|faq| u64::from(faq.frequency())).sum()
}

/// The first `n` records (all of them when fewer exist).
///
/// The slice is expected to be sorted by descending frequency already;
/// no sorting happens here.
pub fn top_n(records: &[Faq], n: usize) -> &[Faq] {
    &records[..n.min(records.len())]
}

/// `frequency / total * 100`, rounded half-up to a whole percent.
///
/// Returns 0 when `total` is 0.
pub fn percentage_share(frequency: u32, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    // floor(f * 100 / t + 1/2) == floor((200f + t) / 2t)
    let rounded = (u64::from(frequency) * 200 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// `frequency / total` clamped to `[0, 1]`; 0.0 when `total` is 0
pub fn share_ratio(frequency: u32, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(frequency) / total as f64).clamp(0.0, 1.0)
}

/// The most asked record of a descending-sorted slice
pub fn most_asked(records: &[Faq]) -> Option<&Faq> {
    records.first()
}
