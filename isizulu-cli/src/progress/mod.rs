//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use isizulu_engine::{BatchSummary, ItemRecord};
use std::time::Duration;

/// Progress reporter for batch processing
///
/// `item_done` may be called from worker threads.
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

    /// Show a bar for `total_items`; single items get no bar
    pub fn init_items(&mut self, total_items: u64) {
        if self.quiet || total_items < 2 {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} items {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        let pb = ProgressBar::new(total_items);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record a finished item
    pub fn item_done(&self, record: &ItemRecord) {
        if let Some(pb) = &self.progress_bar {
            if let Some(error) = &record.error {
                pb.println(format!("✗ {}: {error}", record.filename));
            }
            pb.set_message(format!("Processed: {}", record.filename));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self, summary: &BatchSummary) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!(
                "{} completed, {} failed",
                summary.completed, summary.failed
            ));
        }
    }
}
