//! Batch progress display for multi-code runs

use crate::io::configuration::{MIN_CODES_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Icons: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many identicons of a batch have been written
///
/// Small batches finish too quickly for a bar to be useful, so the bar is
/// only created once the batch exceeds [`MIN_CODES_FOR_PROGRESS`].
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    total: usize,
    completed: usize,
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare the display for a batch of `total` codes
    pub fn initialize(&mut self, total: usize) {
        self.total = total;
        self.completed = 0;
        if total > MIN_CODES_FOR_PROGRESS {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Show which code is being rendered
    pub fn start_code(&self, code: u64) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("{code:#010x}"));
        }
    }

    /// Count one finished (or skipped) code
    pub fn complete_code(&mut self) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Number of codes reported complete
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Number of codes in the batch
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether a visible bar was created
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Clean up the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All icons written");
        }
    }
}
