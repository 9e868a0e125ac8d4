//! Top questions - label, frequency chip and a share gauge per question

use crate::format::chip_label;
use faq_domain::{DashboardSnapshot, share_ratio};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

pub struct TopQuestionsWidget<'a> {
    snapshot: &'a DashboardSnapshot,
    top_n: usize,
}

impl<'a> TopQuestionsWidget<'a> {
    pub fn new(snapshot: &'a DashboardSnapshot, top_n: usize) -> Self {
        Self { snapshot, top_n }
    }
}

impl<'a> Widget for TopQuestionsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Top Questions ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        for (i, row) in self.snapshot.top(self.top_n).iter().enumerate() {
            let y = inner.y + (i as u16) * 2;
            if y + 1 >= inner.bottom() {
                break;
            }

            let chip = chip_label(row.faq.frequency(), row.share);
            let line = Line::from(vec![
                Span::styled(
                    format!("{chip} "),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(row.faq.question().to_string()),
            ]);
            Paragraph::new(line).render(Rect::new(inner.x, y, inner.width, 1), buf);

            Gauge::default()
                .gauge_style(Style::default().fg(Color::Blue).bg(Color::Black))
                .ratio(share_ratio(row.faq.frequency(), self.snapshot.total_frequency))
                .label("")
                .render(Rect::new(inner.x, y + 1, inner.width, 1), buf);
        }
    }
}
