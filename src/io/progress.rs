//! File-level progress display for batch runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many files of a batch have been handled
///
/// Log lines emitted while the bar is visible should go through
/// [`ProgressManager::suspend`] so the bar is redrawn below them.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(FILE_STYLE.clone());
        Self { bar }
    }

    /// Set the number of files the batch will handle
    pub fn initialize(&self, file_count: usize) {
        self.bar.set_length(file_count as u64);
        self.bar.set_position(0);
    }

    /// Show the file currently being processed
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Count a file as handled, whether it succeeded or not
    pub fn complete_file(&self) {
        self.bar.inc(1);
    }

    /// Number of files counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Run `f` with the bar hidden, then redraw it
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
