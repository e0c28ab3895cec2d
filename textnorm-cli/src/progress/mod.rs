//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for line normalization
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the progress bar for `total_lines` lines
    pub fn init_lines(&mut self, total_lines: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_lines);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} lines {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record `count` more normalized lines
    pub fn lines_completed(&self, count: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(count);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self, message: String) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(message);
        }
    }
}
