//! Progress display for batch operations

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Batch-level progress bar over the files of one operation
///
/// Per-file warnings are routed through [`ProgressManager::warn`] so they do
/// not tear the bar while it is drawing.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress bar; the batch sets its length once files are known
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Set the total file count once the batch has collected its files
    pub fn initialize(&self, file_count: usize) {
        self.bar.set_length(file_count as u64);
    }

    /// Show the file currently being processed
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        self.bar.set_message(display_name);
    }

    /// Mark the current file as finished
    pub fn file_done(&self) {
        self.bar.inc(1);
    }

    /// Print a warning without tearing the progress bar
    // Allow print for user feedback on skipped files
    #[allow(clippy::print_stderr)]
    pub fn warn(&self, message: &str) {
        self.bar.suspend(|| eprintln!("{message}"));
    }

    /// Clear the bar once the batch ends
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Route a warning through the progress bar when one is active
// Allow print for user feedback on skipped files
#[allow(clippy::print_stderr)]
pub fn warn(progress: Option<&ProgressManager>, message: &str) {
    match progress {
        Some(pm) => pm.warn(message),
        None => eprintln!("{message}"),
    }
}
