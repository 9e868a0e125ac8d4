//! Full-body message - loading spinner, error text or empty collection

use crate::tui::state::{LoadState, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub const EMPTY_MESSAGE: &str = "No FAQs available at this time.";

pub struct MessageWidget<'a> {
    state: &'a TuiState,
}

impl<'a> MessageWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn line(&self) -> Line<'a> {
        match &self.state.load {
            LoadState::Loading => Line::from(vec![
                Span::styled(
                    format!("{} ", self.state.spinner()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw("Loading FAQs..."),
            ]),
            LoadState::Error(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            LoadState::Ready(_) => Line::from(Span::styled(
                EMPTY_MESSAGE,
                Style::default().fg(Color::Yellow),
            )),
        }
    }
}

impl<'a> Widget for MessageWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        // Vertically center the single line
        let y = inner.y + inner.height / 2;
        let line_area = Rect::new(inner.x, y, inner.width, inner.height.min(1));

        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(line_area, buf);
    }
}
