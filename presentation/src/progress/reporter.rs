//! Progress reporting for report-mode dashboard loads

use colored::Colorize;
use faq_application::LoadProgressNotifier;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports load progress with an indicatif spinner on stderr
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
    draw_target: fn() -> ProgressDrawTarget,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            draw_target: ProgressDrawTarget::stderr,
        }
    }

    #[cfg(test)]
    fn hidden() -> Self {
        Self {
            spinner: Mutex::new(None),
            draw_target: ProgressDrawTarget::hidden,
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|mut guard| guard.take())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadProgressNotifier for ProgressReporter {
    fn on_fetch_start(&self) {
        let pb = ProgressBar::with_draw_target(None, (self.draw_target)());
        pb.set_style(Self::spinner_style());
        pb.set_message("Loading FAQs...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_fetch_complete(&self, record_count: usize) {
        if let Some(pb) = self.take_spinner() {
            pb.finish_with_message(format!("{} Loaded {} FAQs", "v".green(), record_count));
        }
    }

    fn on_fetch_failed(&self, message: &str) {
        if let Some(pb) = self.take_spinner() {
            pb.abandon_with_message(format!("{} {}", "x".red(), message));
        }
    }
}

/// Simple text-based progress (no fancy UI), for non-terminal stderr
pub struct SimpleProgress;

impl LoadProgressNotifier for SimpleProgress {
    fn on_fetch_start(&self) {
        eprintln!("{} {}", "->".cyan(), "Loading FAQs...".bold());
    }

    fn on_fetch_complete(&self, record_count: usize) {
        eprintln!("  {} {} FAQs loaded", "v".green(), record_count);
    }

    fn on_fetch_failed(&self, message: &str) {
        eprintln!("  {} {}", "x".red(), message);
    }
}
