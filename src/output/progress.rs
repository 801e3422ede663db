//! Per-step progress spinners

use std::time::Duration;

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while one step runs, replaced by a status line when done.
///
/// Nothing animates when stderr is not a terminal; the final status line is
/// still printed.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.bar.set_message(message.into());
    }

    pub fn succeed(&self, message: impl Into<String>) {
        self.finish("✔".green(), message.into());
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.finish("⚠".yellow(), message.into());
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.finish("✖".red(), message.into());
    }

    fn finish(&self, symbol: ColoredString, message: String) {
        self.bar.finish_and_clear();
        eprintln!("{} {}", symbol, message);
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
