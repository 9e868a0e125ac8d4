//! Full FAQ table - sortable and paginated

use crate::format::{percent_label, rank_label};
use crate::tui::state::TuiState;
use faq_domain::SortColumn;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

pub struct FaqTableWidget<'a> {
    state: &'a TuiState,
}

impl<'a> FaqTableWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn header_row(&self) -> Row<'static> {
        let column = self.state.table.column();
        let arrow = self.state.table.direction().arrow();
        let title = |label: &str, sort: Option<SortColumn>| {
            if sort == Some(column) {
                format!("{label} {arrow}")
            } else {
                label.to_string()
            }
        };

        Row::new(vec![
            Cell::from(title("Rank", Some(SortColumn::Rank))),
            Cell::from(title("Question", Some(SortColumn::Question))),
            Cell::from(title("Answer", None)),
            Cell::from(Text::from(title("Frequency", Some(SortColumn::Frequency))).right_aligned()),
            Cell::from(Text::from(title("Percentage", Some(SortColumn::Share))).right_aligned()),
        ])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    }
}

impl<'a> Widget for FaqTableWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(page) = self.state.table_page() else {
            return;
        };

        let rows: Vec<Row> = page
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else if i % 2 == 1 {
                    Style::default().bg(Color::Rgb(24, 24, 32))
                } else {
                    Style::default()
                };

                Row::new(vec![
                    Cell::from(rank_label(row.rank)),
                    Cell::from(row.faq.question().to_string()),
                    Cell::from(row.faq.answer().to_string()),
                    Cell::from(Text::from(row.faq.frequency().to_string()).right_aligned()),
                    Cell::from(Text::from(percent_label(row.share)).right_aligned()),
                ])
                .style(style)
            })
            .collect();

        let title = format!(
            " All Questions - page {}/{} ({} rows) ",
            page.page + 1,
            page.page_count,
            page.total_rows
        );

        Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(35),
                Constraint::Fill(1),
                Constraint::Length(12),
                Constraint::Length(13),
            ],
        )
        .header(self.header_row())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
    }
}
