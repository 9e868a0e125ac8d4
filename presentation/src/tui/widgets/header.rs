//! Header widget - title, subtitle and load indicator

use crate::tui::state::{LoadState, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const TITLE: &str = "FAQ Analytics Dashboard";
pub const SUBTITLE: &str =
    "Real-time analysis of frequently asked questions and their distribution";

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dot_color = match self.state.load {
            LoadState::Loading => Color::Yellow,
            LoadState::Ready(_) => Color::Green,
            LoadState::Error(_) => Color::Red,
        };

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(dot_color)),
            Span::styled(SUBTITLE, Style::default().fg(Color::Gray)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {TITLE} "),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
