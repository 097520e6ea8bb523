//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for documents being highlighted
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

    /// Show a bar when there is more than one document
    pub fn init_documents(&mut self, total: u64) {
        if self.quiet || total < 2 {
            return;
        }

        let pb = ProgressBar::new(total);
        match ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("Falling back to default progress style: {e}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record a highlighted document
    pub fn document_completed(&self, source: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Highlighted: {}", source));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }

    /// Whether a bar is being shown
    pub fn is_visible(&self) -> bool {
        self.progress_bar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_hides_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_documents(10);
        assert!(!reporter.is_visible());
        reporter.document_completed("a.txt");
        reporter.finish();
    }

    #[test]
    fn test_single_document_hides_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_documents(1);
        assert!(!reporter.is_visible());
    }

    #[test]
    fn test_multiple_documents_show_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_documents(3);
        assert!(reporter.is_visible());
        reporter.document_completed("a.txt");
        reporter.finish();
    }
}
