//! Summary cards - total questions, total inquiries and the most asked question

use faq_domain::DashboardSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct SummaryCardsWidget<'a> {
    snapshot: &'a DashboardSnapshot,
}

impl<'a> SummaryCardsWidget<'a> {
    pub fn new(snapshot: &'a DashboardSnapshot) -> Self {
        Self { snapshot }
    }

    fn card(title: &'a str, color: Color, lines: Vec<Line<'a>>) -> Paragraph<'a> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {title} "),
                Style::default().fg(Color::Gray),
            ));
        Paragraph::new(lines).block(block)
    }
}

impl<'a> Widget for SummaryCardsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(50),
            ])
            .split(area);

        let value_style = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

        Self::card(
            "Total Questions",
            Color::Blue,
            vec![Line::from(Span::styled(
                self.snapshot.total_questions.to_string(),
                value_style(Color::Blue),
            ))],
        )
        .render(columns[0], buf);

        Self::card(
            "Total Inquiries",
            Color::Green,
            vec![Line::from(Span::styled(
                self.snapshot.total_frequency.to_string(),
                value_style(Color::Green),
            ))],
        )
        .render(columns[1], buf);

        let most_asked = match self.snapshot.most_asked() {
            Some(row) => vec![
                Line::from(row.faq.question().to_string()),
                Line::from(Span::styled(
                    row.faq.frequency().to_string(),
                    value_style(Color::Yellow),
                )),
            ],
            None => vec![Line::from("-")],
        };
        Self::card("Most Asked Question", Color::Yellow, most_asked).render(columns[2], buf);
    }
}
