//! Progress reporting module

use genfilt_core::ProgressFn;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Line-count spinner for a filter run
///
/// Hidden when quiet; indicatif also hides it when stderr is not a terminal.
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

    /// Start the spinner for `input`
    pub fn start(&mut self, input: &str) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner} [{elapsed_precise}] {pos} lines {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message(input.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Callback for the filter drivers, if the spinner is running
    pub fn callback(&self) -> Option<ProgressFn> {
        let pb = self.progress_bar.clone()?;
        Some(Box::new(move |lines| pb.set_position(lines)))
    }

    /// Whether a spinner is running
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Finish progress reporting
    pub fn finish(&self, total: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(total);
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_callback() {
        let mut reporter = ProgressReporter::new(true);
        reporter.start("train.de");
        assert!(!reporter.is_active());
        assert!(reporter.callback().is_none());
        reporter.finish(10);
    }

    #[test]
    fn test_callback_advances_spinner() {
        let mut reporter = ProgressReporter::new(false);
        reporter.start("train.de");
        assert!(reporter.is_active());

        let callback = reporter.callback().unwrap();
        callback(20_000);
        assert_eq!(reporter.progress_bar.as_ref().unwrap().position(), 20_000);
        reporter.finish(25_000);
    }
}
