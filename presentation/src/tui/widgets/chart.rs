//! Question distribution chart - top records as proportional bars

use crate::format::{percent_label, slice_color, truncate_label};
use faq_domain::DashboardSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget},
};

pub struct ChartWidget<'a> {
    snapshot: &'a DashboardSnapshot,
    top_n: usize,
    label_max_chars: usize,
}

impl<'a> ChartWidget<'a> {
    pub fn new(snapshot: &'a DashboardSnapshot, top_n: usize, label_max_chars: usize) -> Self {
        Self {
            snapshot,
            top_n,
            label_max_chars,
        }
    }
}

impl<'a> Widget for ChartWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bars: Vec<Bar> = self
            .snapshot
            .chart_slices(self.top_n)
            .iter()
            .enumerate()
            .map(|(i, slice)| {
                let color = slice_color(i);
                Bar::default()
                    .value(u64::from(slice.value))
                    .label(Line::from(truncate_label(&slice.question, self.label_max_chars)))
                    .text_value(format!("{} ({})", slice.value, percent_label(slice.share)))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(Color::Black).bg(color))
            })
            .collect();

        let bar_chart = BarChart::default()
            .block(
                Block::default()
                    .title(" Question Distribution Analysis ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(1)
            .value_style(Style::default().add_modifier(Modifier::BOLD))
            .label_style(Style::default().fg(Color::White))
            .data(BarGroup::default().bars(&bars));

        bar_chart.render(area, buf);
    }
}
