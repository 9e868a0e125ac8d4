//! TUI application state

use super::mode::{Action, Mode};
use faq_application::DashboardParams;
use faq_domain::{DashboardSnapshot, RankedFaq, TablePage, TableView};

/// Spinner frames for the loading screen
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Where the dashboard is in its load lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(DashboardSnapshot),
    /// Holds the user-facing message
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match self {
            LoadState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Status line label
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading => "LOADING",
            LoadState::Ready(_) => "READY",
            LoadState::Error(_) => "ERROR",
        }
    }
}

/// Complete TUI state
#[derive(Debug, Clone)]
pub struct TuiState {
    pub load: LoadState,
    pub mode: Mode,
    pub table: TableView,
    /// Selected row within the current page
    pub selected: usize,
    pub params: DashboardParams,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(params: DashboardParams) -> Self {
        Self {
            load: LoadState::Loading,
            mode: Mode::default(),
            table: TableView::new(params.page_size),
            selected: 0,
            params,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Enter `Loading` from any state
    pub fn begin_loading(&mut self) {
        self.load = LoadState::Loading;
        self.table = TableView::new(self.params.page_size);
        self.selected = 0;
    }

    /// Apply a load completion
    ///
    /// Returns `false` (and leaves the state untouched) unless a load was
    /// in flight.
    pub fn finish(&mut self, result: Result<DashboardSnapshot, String>) -> bool {
        if !self.load.is_loading() {
            return false;
        }
        self.load = match result {
            Ok(snapshot) => LoadState::Ready(snapshot),
            Err(message) => LoadState::Error(message),
        };
        true
    }

    /// Advance the spinner animation
    pub fn tick(&mut self) {
        if self.load.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn show_help(&self) -> bool {
        self.mode == Mode::Help
    }

    /// Current table page, when data is loaded
    pub fn table_page(&self) -> Option<TablePage<'_>> {
        self.load
            .snapshot()
            .map(|snapshot| self.table.page(&snapshot.ranked))
    }

    /// Row under the selection cursor
    pub fn selected_row(&self) -> Option<&RankedFaq> {
        self.table_page()
            .and_then(|page| page.rows.get(self.selected).copied())
    }

    fn total_rows(&self) -> usize {
        self.load.snapshot().map_or(0, |s| s.ranked.len())
    }

    fn rows_on_page(&self) -> usize {
        self.table_page().map_or(0, |page| page.rows.len())
    }

    /// Apply a user action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    Mode::Dashboard => Mode::Help,
                    Mode::Help => Mode::Dashboard,
                };
                return;
            }
            Action::None => return,
            _ => {}
        }

        // Table actions only make sense once data is on screen
        let total_rows = self.total_rows();
        if total_rows == 0 {
            return;
        }

        match action {
            Action::SelectNext => {
                let rows = self.rows_on_page();
                if self.selected + 1 < rows {
                    self.selected += 1;
                }
            }
            Action::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::NextPage => {
                self.table.next_page(total_rows);
                self.selected = 0;
            }
            Action::PrevPage => {
                self.table.prev_page();
                self.selected = 0;
            }
            Action::FirstPage => {
                self.table.first_page();
                self.selected = 0;
            }
            Action::LastPage => {
                self.table.last_page(total_rows);
                self.selected = 0;
            }
            Action::CycleSort => {
                self.table.cycle_column();
                self.selected = 0;
            }
            Action::ReverseSort => {
                self.table.toggle_direction();
                self.selected = 0;
            }
            Action::SortBy(column) => {
                self.table.sort_by(column);
                self.selected = 0;
            }
            Action::Quit | Action::ToggleHelp | Action::None => {}
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new(DashboardParams::default())
    }
}
