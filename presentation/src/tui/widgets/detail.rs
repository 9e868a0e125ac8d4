//! Detail pane for the selected table row

use crate::format::frequency_tooltip;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct DetailWidget<'a> {
    state: &'a TuiState,
}

impl<'a> DetailWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for DetailWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = match self.state.selected_row() {
            Some(row) => frequency_tooltip(row.faq.question(), row.faq.frequency())
                .lines()
                .map(|l| Line::from(l.to_string()))
                .collect(),
            None => vec![Line::from("-")],
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Selected ")
            .border_style(Style::default().fg(Color::DarkGray));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
