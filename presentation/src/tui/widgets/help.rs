//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const KEYS: [(&str, &str); 9] = [
    ("j/k, ↓/↑", "Move the table selection"),
    ("n/p, PgDn/PgUp", "Next / previous page"),
    ("g/G", "First / last page"),
    ("s", "Sort by the next column"),
    ("r", "Reverse the sort direction"),
    ("1-4", "Sort by Rank / Question / Frequency / Percentage"),
    ("?", "Toggle this help"),
    ("q, Esc", "Quit"),
    ("Ctrl+C", "Quit"),
];

/// Widget for rendering help overlay
pub struct HelpWidget;

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (key, description) in KEYS {
            lines.push(Line::from(vec![
                Span::styled(format!("{key:<16}"), Style::default().fg(Color::Yellow)),
                Span::raw(description),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let paragraph = Paragraph::new(Self::build_help_text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true });

        paragraph.render(area, buf);
    }
}

impl Default for HelpWidget {
    fn default() -> Self {
        Self::new()
    }
}
