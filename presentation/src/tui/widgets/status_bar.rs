//! Status bar widget - load indicator, sort/page info and key hints

use crate::tui::mode::Mode;
use crate::tui::state::{LoadState, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn indicator_color(&self) -> Color {
        if self.state.mode == Mode::Help {
            return self.state.mode.color();
        }
        match self.state.load {
            LoadState::Loading => Color::Yellow,
            LoadState::Ready(_) => Color::Green,
            LoadState::Error(_) => Color::Red,
        }
    }

    fn indicator_text(&self) -> &'static str {
        if self.state.mode == Mode::Help {
            self.state.mode.indicator()
        } else {
            self.state.load.label()
        }
    }

    fn info_text(&self) -> String {
        match &self.state.load {
            LoadState::Ready(snapshot) if !snapshot.is_empty() => format!(
                " Sort: {} {} | Page {}/{} | Loaded {}",
                self.state.table.column(),
                self.state.table.direction().arrow(),
                self.state.table.current_page() + 1,
                self.state.table.page_count(snapshot.ranked.len()),
                snapshot.loaded_at.format("%H:%M:%S UTC"),
            ),
            LoadState::Ready(snapshot) => {
                format!(" Loaded {}", snapshot.loaded_at.format("%H:%M:%S UTC"))
            }
            _ => String::new(),
        }
    }

    fn hints(&self) -> &'static str {
        match (self.state.mode, &self.state.load) {
            (Mode::Help, _) => "?/Esc:close  Ctrl+C:quit",
            (Mode::Dashboard, LoadState::Ready(_)) => {
                "j/k:select  n/p:page  s:sort  r:reverse  ?:help  q:quit"
            }
            (Mode::Dashboard, _) => "?:help  q:quit",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        // Left: indicator plus sort/page info
        let indicator = self.indicator_text();
        let indicator_style = Style::default()
            .fg(Color::Black)
            .bg(self.indicator_color())
            .add_modifier(Modifier::BOLD);
        let info = self.info_text();
        let left_line = Line::from(vec![
            Span::styled(format!(" {indicator} "), indicator_style),
            Span::styled(info.clone(), bg_style),
        ]);
        let left_width = (indicator.len() + 2 + info.chars().count()) as u16;
        buf.set_line(area.x, area.y, &left_line, area.width);

        // Right: key hints, right-aligned when there is room
        let hints = self.hints();
        let hints_width = hints.len() as u16;
        let right_x = area.right().saturating_sub(hints_width + 1);
        if right_x > area.x + left_width {
            let right_line = Line::from(Span::styled(hints, bg_style));
            buf.set_line(right_x, area.y, &right_line, hints_width + 1);
        }
    }
}
