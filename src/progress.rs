use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Receives a callback after every processed page.
///
/// `total` is known up front in buffered mode and `None` when streaming.
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, completed: u64, total: Option<u64>);

    fn finish(&self) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&self, _completed: u64, _total: Option<u64>) {}
}

/// Terminal progress display. Starts as a spinner and becomes a bar once the
/// page count is known.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::no_length();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos} pages {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    fn switch_to_bar(&self, total: u64) {
        self.bar.set_length(total);
        self.bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} pages ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for BarProgress {
    fn on_progress(&self, completed: u64, total: Option<u64>) {
        if let Some(total) = total {
            if self.bar.length() != Some(total) {
                self.switch_to_bar(total);
            }
        }
        self.bar.set_position(completed);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
