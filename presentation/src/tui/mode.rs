//! TUI key handling
//!
//! Defines the interaction modes and maps key events to actions:
//! - Dashboard mode: navigation, sorting and paging
//! - Help mode: the help overlay is open

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use faq_domain::SortColumn;

/// Interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Dashboard mode - table navigation and sorting
    #[default]
    Dashboard,
    /// Help overlay is shown
    Help,
}

impl Mode {
    /// Get the mode indicator string for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Dashboard => "DASHBOARD",
            Self::Help => "HELP",
        }
    }

    /// Get the mode color for status line
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Dashboard => Color::Blue,
            Self::Help => Color::Magenta,
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit application
    Quit,
    /// Move the table selection down one row
    SelectNext,
    /// Move the table selection up one row
    SelectPrev,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Sort by the next column
    CycleSort,
    /// Reverse the sort direction
    ReverseSort,
    /// Sort by a specific column (toggles direction when already selected)
    SortBy(SortColumn),
    /// Open or close the help overlay
    ToggleHelp,
    /// No action
    None,
}

/// Key event handler - maps key events to actions based on current mode
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event in the given mode
    pub fn handle(mode: Mode, key: KeyEvent) -> Action {
        if matches!(key.code, KeyCode::Char('c' | 'C'))
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            return Action::Quit;
        }

        match mode {
            Mode::Dashboard => Self::handle_dashboard(key),
            Mode::Help => Self::handle_help(key),
        }
    }

    fn handle_dashboard(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

            // Selection
            KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,
            KeyCode::Char('k') | KeyCode::Up => Action::SelectPrev,

            // Paging
            KeyCode::Char('n') | KeyCode::PageDown | KeyCode::Right => Action::NextPage,
            KeyCode::Char('p') | KeyCode::PageUp | KeyCode::Left => Action::PrevPage,
            KeyCode::Char('g') | KeyCode::Home => Action::FirstPage,
            KeyCode::Char('G') | KeyCode::End => Action::LastPage,

            // Sorting
            KeyCode::Char('s') => Action::CycleSort,
            KeyCode::Char('r') => Action::ReverseSort,
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                Action::SortBy(SortColumn::ALL[index])
            }

            KeyCode::Char('?') => Action::ToggleHelp,
            _ => Action::None,
        }
    }

    fn handle_help(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc => Action::ToggleHelp,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }
}
