//! Run summary output

use anyhow::Result;
use genfilt_core::{FilterStats, SourceStats};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported summary formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable lines
    Text,
    /// A single JSON object
    Json,
}

/// Outcome of one filter run
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum RunSummary {
    /// Target filtering of a parallel corpus
    Target {
        /// Target language code
        language: String,
        /// Requested gender code
        gender: String,
        /// Kept source lines
        source_output: PathBuf,
        /// Kept target lines
        target_output: PathBuf,
        /// Line counts
        stats: FilterStats,
    },
    /// Source filtering of an English corpus
    Source {
        /// Feminine-specific lines
        feminine_output: PathBuf,
        /// Masculine-specific lines
        masculine_output: PathBuf,
        /// Line counts
        stats: SourceStats,
    },
}

/// Trait for summary formatters
pub trait SummaryFormatter {
    /// Write one run summary
    fn write_summary(&mut self, summary: &RunSummary) -> Result<()>;
}

/// Formatter for `format` writing to `writer`
pub fn formatter<'a, W: Write + 'a>(
    format: SummaryFormat,
    writer: W,
) -> Box<dyn SummaryFormatter + 'a> {
    match format {
        SummaryFormat::Text => Box::new(TextFormatter::new(writer)),
        SummaryFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_selection() {
        let mut buf = Vec::new();
        formatter(SummaryFormat::Json, &mut buf)
            .write_summary(&test_support::source_summary())
            .unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with('{'));

        let mut buf = Vec::new();
        formatter(SummaryFormat::Text, &mut buf)
            .write_summary(&test_support::source_summary())
            .unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("Read 7 lines"));
    }
}
