//! Sortable, paginated view over the ranked table

use super::snapshot::RankedFaq;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Column the table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Rank,
    Question,
    Frequency,
    Share,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Rank,
        SortColumn::Question,
        SortColumn::Frequency,
        SortColumn::Share,
    ];

    /// Next column in display order, wrapping around
    pub fn next(self) -> Self {
        match self {
            SortColumn::Rank => SortColumn::Question,
            SortColumn::Question => SortColumn::Frequency,
            SortColumn::Frequency => SortColumn::Share,
            SortColumn::Share => SortColumn::Rank,
        }
    }

    /// Direction a column sorts in when first selected
    pub fn natural_direction(self) -> SortDirection {
        match self {
            SortColumn::Rank | SortColumn::Question => SortDirection::Ascending,
            SortColumn::Frequency | SortColumn::Share => SortDirection::Descending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Rank => "Rank",
            SortColumn::Question => "Question",
            SortColumn::Frequency => "Frequency",
            SortColumn::Share => "Percentage",
        }
    }

    fn compare(self, a: &RankedFaq, b: &RankedFaq) -> Ordering {
        match self {
            SortColumn::Rank => a.rank.cmp(&b.rank),
            SortColumn::Question => a
                .faq
                .question()
                .to_lowercase()
                .cmp(&b.faq.question().to_lowercase()),
            SortColumn::Frequency => a.faq.frequency().cmp(&b.faq.frequency()),
            SortColumn::Share => a.share.cmp(&b.share),
        }
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// One page of sorted rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a RankedFaq>,
    /// 0-based page index actually shown (after clamping)
    pub page: usize,
    pub page_count: usize,
    pub total_rows: usize,
}

/// Sort and paging parameters for the ranked table
///
/// Ties in the sort column are always broken by rank, so the order is
/// deterministic in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView {
    column: SortColumn,
    direction: SortDirection,
    page: usize,
    page_size: usize,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new(10)
    }
}

impl TableView {
    /// Create a view sorted by rank; a page size of 0 is raised to 1
    pub fn new(page_size: usize) -> Self {
        Self {
            column: SortColumn::Rank,
            direction: SortColumn::Rank.natural_direction(),
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn column(&self) -> SortColumn {
        self.column
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Number of pages needed for `total_rows` (never less than 1)
    pub fn page_count(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size).max(1)
    }

    /// Sort by `column`; selecting the current column reverses it
    pub fn sort_by(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.toggle();
        } else {
            self.column = column;
            self.direction = column.natural_direction();
        }
        self.page = 0;
    }

    /// Move to the next column in its natural direction
    pub fn cycle_column(&mut self) {
        let next = self.column.next();
        self.column = next;
        self.direction = next.natural_direction();
        self.page = 0;
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggle();
        self.page = 0;
    }

    pub fn next_page(&mut self, total_rows: usize) {
        if self.page + 1 < self.page_count(total_rows) {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn first_page(&mut self) {
        self.page = 0;
    }

    pub fn last_page(&mut self, total_rows: usize) {
        self.page = self.page_count(total_rows) - 1;
    }

    /// Sort `rows` and cut out the current page
    pub fn page<'a>(&self, rows: &'a [RankedFaq]) -> TablePage<'a> {
        let total_rows = rows.len();
        let mut sorted: Vec<&RankedFaq> = rows.iter().collect();
        sorted.sort_by(|a, b| {
            let ordering = self.column.compare(a, b);
            let ordering = match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            };
            ordering.then_with(|| a.rank.cmp(&b.rank))
        });

        let page_count = self.page_count(total_rows);
        let page = self.page.min(page_count - 1);
        let rows = sorted
            .into_iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .collect();

        TablePage {
            rows,
            page,
            page_count,
            total_rows,
        }
    }
}
