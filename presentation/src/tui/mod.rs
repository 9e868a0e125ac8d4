//! TUI (Text User Interface) module for faq-dashboard
//!
//! This module provides the interactive terminal dashboard using ratatui.
//! It loads the FAQ collection in a background task and renders the
//! loading, error and ready screens from one [`TuiState`].

mod app;
mod event;
mod mode;
mod state;
mod widgets;

pub use app::{TuiApp, render, spawn_load};
pub use event::TuiEvent;
pub use mode::{Action, KeyHandler, Mode};
pub use state::{LoadState, SPINNER_FRAMES, TuiState};
pub use widgets::MainLayout;
