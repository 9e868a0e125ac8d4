//! TUI widgets - ratatui components for the dashboard layout
//!
//! Layout:
//! ┌── Header (3) ──────────────────────────────────────┐
//! ├── Summary cards (4) ───────────────────────────────┤
//! ├── Chart (60%) ─────────────┬── Top questions (40%) ┤
//! ├── Table (flex) ────────────────────────────────────┤
//! ├── Detail (4) ──────────────────────────────────────┤
//! └── StatusBar (1) ───────────────────────────────────┘

pub mod chart;
pub mod detail;
pub mod faq_table;
pub mod header;
pub mod help;
pub mod message;
pub mod status_bar;
pub mod summary_cards;
pub mod top_questions;

use faq_application::DashboardParams;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    /// Everything between header and status bar (loading/error/empty screens)
    pub body: Rect,
    pub cards: Rect,
    pub chart: Rect,
    pub top_questions: Rect,
    pub table: Rect,
    pub detail: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect, params: &DashboardParams) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);
        let (header, body, status_bar) = (outer[0], outer[1], outer[2]);

        // Chart bars are one row apart; each top question takes a label row
        // and a gauge row.
        let chart_rows = params.chart_top_n.saturating_mul(2).saturating_sub(1);
        let top_rows = params.top_questions.saturating_mul(2);
        let middle_h = (chart_rows.max(top_rows) + 2).min(u16::MAX as usize) as u16;

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(middle_h),
                Constraint::Fill(1),
                Constraint::Length(4),
            ])
            .split(body);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical[1]);

        Self {
            header,
            body,
            cards: vertical[0],
            chart: middle[0],
            top_questions: middle[1],
            table: vertical[2],
            detail: vertical[3],
            status_bar,
        }
    }

    /// Centered overlay rectangle for help dialog
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_stack_vertically() {
        let area = Rect::new(0, 0, 120, 50);
        let layout = MainLayout::compute(area, &DashboardParams::default());

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 49);
        assert_eq!(layout.cards.height, 4);
        // five bars one row apart, plus borders
        assert_eq!(layout.chart.height, 11);
        assert_eq!(layout.chart.y, layout.top_questions.y);
        assert!(layout.chart.width > layout.top_questions.width);
        assert!(layout.table.height >= 5);
        assert_eq!(layout.body.height, 46);
    }

    #[test]
    fn test_layout_fits_small_terminal() {
        let area = Rect::new(0, 0, 40, 10);
        let layout = MainLayout::compute(area, &DashboardParams::default());
        for rect in [layout.header, layout.cards, layout.chart, layout.table, layout.status_bar] {
            assert!(rect.bottom() <= area.bottom());
        }
    }

    #[test]
    fn test_centered_overlay_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let overlay = MainLayout::centered_overlay(60, 50, area);
        assert_eq!(overlay.width, 60);
        assert_eq!(overlay.height, 20);
        assert_eq!(overlay.x, 20);
        assert_eq!(overlay.y, 10);
    }
}
