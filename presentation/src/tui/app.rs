//! TUI application - main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 load task (tokio::spawn)
//!   ├─ crossterm EventStream              └─ LoadDashboardUseCase::execute()
//!   ├─ event_rx (TuiEvent::Loaded)  <──────── event_tx
//!   └─ tick_interval (spinner)
//! ```

use super::event::TuiEvent;
use super::mode::KeyHandler;
use super::state::{LoadState, TuiState};
use super::widgets::{
    MainLayout, chart::ChartWidget, detail::DetailWidget, faq_table::FaqTableWidget,
    header::HeaderWidget, help::HelpWidget, message::MessageWidget,
    status_bar::StatusBarWidget, summary_cards::SummaryCardsWidget,
    top_questions::TopQuestionsWidget,
};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use faq_application::{DashboardParams, FaqProvider, LoadDashboardUseCase};
use futures::stream::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Main TUI application
pub struct TuiApp<P: FaqProvider + 'static> {
    use_case: Arc<LoadDashboardUseCase<P>>,
    params: DashboardParams,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    event_rx: mpsc::UnboundedReceiver<TuiEvent>,
}

impl<P: FaqProvider + 'static> TuiApp<P> {
    pub fn new(provider: Arc<P>, params: DashboardParams) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            use_case: Arc::new(LoadDashboardUseCase::new(provider)),
            params,
            event_tx,
            event_rx,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut state = TuiState::new(self.params);
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(100));

        // Initial (and only) load
        state.begin_loading();
        spawn_load(Arc::clone(&self.use_case), self.event_tx.clone());

        loop {
            terminal.draw(|frame| render(frame, &state))?;

            if state.should_quit {
                info!("Dashboard closed");
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(term_event)) => handle_terminal_event(&mut state, term_event),
                        Some(Err(e)) => return Err(e),
                        None => break,
                    }
                }

                // Load completions from the background task
                Some(event) = self.event_rx.recv() => {
                    apply_tui_event(&mut state, event);
                }

                // Spinner animation
                _ = tick.tick() => {
                    state.tick();
                }
            }
        }

        Ok(())
    }
}

/// Start one dashboard load in the background
///
/// The result is sent over `event_tx`; if the receiving side is gone the
/// result is dropped.
pub fn spawn_load<P: FaqProvider + 'static>(
    use_case: Arc<LoadDashboardUseCase<P>>,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = use_case
            .execute()
            .await
            .map_err(|e| e.user_message().to_string());

        if event_tx.send(TuiEvent::Loaded(result)).is_err() {
            debug!("Dashboard closed before the load finished; result discarded");
        }
    })
}

fn handle_terminal_event(state: &mut TuiState, event: Event) {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            let action = KeyHandler::handle(state.mode, key);
            state.apply(action);
        }
    }
}

fn apply_tui_event(state: &mut TuiState, event: TuiEvent) {
    match event {
        TuiEvent::Loaded(result) => {
            if !state.finish(result) {
                debug!("Ignoring load completion outside the loading state");
            }
        }
    }
}

/// Render the whole dashboard for the current state
pub fn render(frame: &mut Frame, state: &TuiState) {
    let area = frame.area();
    let layout = MainLayout::compute(area, &state.params);

    frame.render_widget(HeaderWidget::new(state), layout.header);

    match &state.load {
        LoadState::Ready(snapshot) if !snapshot.is_empty() => {
            frame.render_widget(SummaryCardsWidget::new(snapshot), layout.cards);
            frame.render_widget(
                ChartWidget::new(
                    snapshot,
                    state.params.chart_top_n,
                    state.params.label_max_chars,
                ),
                layout.chart,
            );
            frame.render_widget(
                TopQuestionsWidget::new(snapshot, state.params.top_questions),
                layout.top_questions,
            );
            frame.render_widget(FaqTableWidget::new(state), layout.table);
            frame.render_widget(DetailWidget::new(state), layout.detail);
        }
        _ => frame.render_widget(MessageWidget::new(state), layout.body),
    }

    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

    // Help overlay
    if state.show_help() {
        let help_area = MainLayout::centered_overlay(70, 70, area);
        frame.render_widget(HelpWidget::new(), help_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::mode::Action;
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use faq_application::{FETCH_FAILED_MESSAGE, ProviderError};
    use faq_domain::{DashboardSnapshot, Faq, FaqCollection, SortColumn};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    struct StubProvider {
        records: Vec<Faq>,
        fail: bool,
    }

    #[async_trait]
    impl FaqProvider for StubProvider {
        async fn fetch_all(&self) -> Result<Vec<Faq>, ProviderError> {
            if self.fail {
                return Err(ProviderError::Unavailable("database offline".into()));
            }
            Ok(self.records.clone())
        }

        async fn search(&self, _query: &str) -> Result<Vec<Faq>, ProviderError> {
            self.fetch_all().await
        }
    }

    fn records() -> Vec<Faq> {
        vec![
            Faq::new(7, "What are the prizes?", "Cash rewards and gadgets.", 225).unwrap(),
            Faq::new(4, "Will there be food provided?", "Yes, meals and snacks.", 201).unwrap(),
            Faq::new(5, "What should I bring to the hackathon?", "Your laptop.", 178).unwrap(),
            Faq::new(1, "What is the registration deadline?", "October 15th.", 156).unwrap(),
            Faq::new(2, "How many team members can participate?", "2-4 members.", 142).unwrap(),
            Faq::new(8, "Will there be mentors available?", "Yes.", 104).unwrap(),
        ]
    }

    fn snapshot(records: Vec<Faq>) -> DashboardSnapshot {
        DashboardSnapshot::from_collection(&FaqCollection::new(records).unwrap())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(state: &TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|frame| render(frame, state))
            .expect("draw should not panic");
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_render_loading_state() {
        let state = TuiState::default();
        let text = draw(&state, 100, 30);
        assert!(text.contains("FAQ Analytics Dashboard"));
        assert!(text.contains("Loading FAQs..."));
        assert!(text.contains("LOADING"));
        assert!(!text.contains("Top Questions"));
    }

    #[test]
    fn test_render_error_state() {
        let mut state = TuiState::default();
        state.finish(Err(FETCH_FAILED_MESSAGE.to_string()));
        let text = draw(&state, 100, 30);
        assert!(text.contains(FETCH_FAILED_MESSAGE));
        assert!(text.contains("ERROR"));
        assert!(!text.contains("All Questions"));
    }

    #[test]
    fn test_render_ready_state() {
        let mut state = TuiState::default();
        state.finish(Ok(snapshot(records())));
        let text = draw(&state, 140, 50);

        assert!(text.contains("Total Questions"));
        assert!(text.contains("Total Inquiries"));
        assert!(text.contains("1006"));
        assert!(text.contains("Most Asked Question"));
        assert!(text.contains("Question Distribution Analysis"));
        assert!(text.contains("Top Questions"));
        assert!(text.contains("225 (22%)"));
        assert!(text.contains("All Questions - page 1/1 (6 rows)"));
        assert!(text.contains("Frequency: 225"));
        assert!(text.contains("READY"));
    }

    #[test]
    fn test_render_chart_truncates_labels() {
        let mut state = TuiState::default();
        state.finish(Ok(snapshot(records())));
        let text = draw(&state, 160, 50);
        assert!(text.contains("What should I bring to the hac..."));
    }

    #[test]
    fn test_render_empty_collection() {
        let mut state = TuiState::default();
        state.finish(Ok(snapshot(Vec::new())));
        let text = draw(&state, 100, 30);
        assert!(text.contains("No FAQs available at this time."));
        assert!(!text.contains("Total Questions"));
    }

    #[test]
    fn test_render_sorted_header_and_help_overlay() {
        let mut state = TuiState::default();
        state.finish(Ok(snapshot(records())));
        state.apply(Action::SortBy(SortColumn::Frequency));
        state.apply(Action::ToggleHelp);
        let text = draw(&state, 140, 50);
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("HELP"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut state = TuiState::default();
        state.finish(Ok(snapshot(records())));
        draw(&state, 20, 6);
        state.apply(Action::ToggleHelp);
        draw(&state, 20, 6);
    }

    #[test]
    fn test_key_events_drive_state() {
        let mut state = TuiState::default();
        state.finish(Ok(snapshot(records())));

        let press = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        handle_terminal_event(&mut state, press(KeyCode::Char('j')));
        assert_eq!(state.selected, 1);
        handle_terminal_event(&mut state, press(KeyCode::Char('q')));
        assert!(state.should_quit);
    }

    #[test]
    fn test_late_completion_is_ignored() {
        let mut state = TuiState::default();
        apply_tui_event(&mut state, TuiEvent::Loaded(Ok(snapshot(records()))));
        apply_tui_event(&mut state, TuiEvent::Loaded(Err("late".into())));
        assert_eq!(state.load.label(), "READY");
    }

    #[tokio::test]
    async fn test_spawn_load_delivers_snapshot() {
        let provider = Arc::new(StubProvider {
            records: records(),
            fail: false,
        });
        let use_case = Arc::new(LoadDashboardUseCase::new(provider));
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_load(use_case, tx).await.unwrap();

        match rx.recv().await {
            Some(TuiEvent::Loaded(Ok(snapshot))) => {
                assert_eq!(snapshot.total_questions, 6);
                assert_eq!(snapshot.most_asked().unwrap().faq.frequency(), 225);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_spawn_load_delivers_user_message_on_failure() {
        let provider = Arc::new(StubProvider {
            records: Vec::new(),
            fail: true,
        });
        let use_case = Arc::new(LoadDashboardUseCase::new(provider));
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_load(use_case, tx).await.unwrap();

        match rx.recv().await {
            Some(TuiEvent::Loaded(Err(message))) => assert_eq!(message, FETCH_FAILED_MESSAGE),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_spawn_load_after_receiver_dropped_is_silent() {
        let provider = Arc::new(StubProvider {
            records: records(),
            fail: false,
        });
        let use_case = Arc::new(LoadDashboardUseCase::new(provider));
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        // The task must finish normally, not panic
        assert!(spawn_load(use_case, tx).await.is_ok());
    }
}
