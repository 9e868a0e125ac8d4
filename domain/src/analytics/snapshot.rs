//! Dashboard view model derived from one fetched collection

use super::aggregate::{percentage_share, total_frequency};
use crate::faq::collection::FaqCollection;
use crate::faq::entities::{Faq, FaqId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A record with its position and share in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedFaq {
    /// 1-based position in descending frequency order
    pub rank: usize,
    pub faq: Faq,
    /// Whole-percent share of the collection's total frequency
    pub share: u32,
}

/// One segment of the proportional chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub id: FaqId,
    pub question: String,
    pub value: u32,
    /// Whole-percent share among the chart's own slices
    pub share: u32,
}

/// Everything a dashboard render needs, computed once per fetch
///
/// The collection handed in must already be sorted by descending
/// frequency; ranks are assigned in the given order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub total_questions: usize,
    pub total_frequency: u64,
    pub ranked: Vec<RankedFaq>,
    pub loaded_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    /// Build a snapshot stamped with the current time
    pub fn from_collection(collection: &FaqCollection) -> Self {
        Self::at(collection, Utc::now())
    }

    /// Build a snapshot with an explicit timestamp
    pub fn at(collection: &FaqCollection, loaded_at: DateTime<Utc>) -> Self {
        let total = total_frequency(collection.as_slice());
        let ranked = collection
            .iter()
            .enumerate()
            .map(|(index, faq)| RankedFaq {
                rank: index + 1,
                faq: faq.clone(),
                share: percentage_share(faq.frequency(), total),
            })
            .collect();

        Self {
            total_questions: collection.len(),
            total_frequency: total,
            ranked,
            loaded_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// The top-ranked record, if any
    pub fn most_asked(&self) -> Option<&RankedFaq> {
        self.ranked.first()
    }

    /// The first `n` ranked rows
    pub fn top(&self, n: usize) -> &[RankedFaq] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// Slices for a proportional chart of the first `n` records.
    ///
    /// Shares are relative to the sum of the returned slices, so the chart
    /// always accounts for its whole area.
    pub fn chart_slices(&self, n: usize) -> Vec<ChartSlice> {
        let top = self.top(n);
        let chart_total: u64 = top.iter().map(|r| u64::from(r.faq.frequency())).sum();
        top.iter()
            .map(|r| ChartSlice {
                id: r.faq.id(),
                question: r.faq.question().to_string(),
                value: r.faq.frequency(),
                share: percentage_share(r.faq.frequency(), chart_total),
            })
            .collect()
    }
}
