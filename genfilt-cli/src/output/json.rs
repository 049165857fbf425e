//! JSON summary formatter

use super::{RunSummary, SummaryFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - one pretty-printed object per summary
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> SummaryFormatter for JsonFormatter<W> {
    fn write_summary(&mut self, summary: &RunSummary) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, summary)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{source_summary, target_summary};
    use serde_json::Value;

    fn render(summary: &RunSummary) -> Value {
        let mut buf = Vec::new();
        JsonFormatter::new(&mut buf).write_summary(summary).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn test_target_summary_fields() {
        let value = render(&target_summary());
        assert_eq!(value["command"], "target");
        assert_eq!(value["language"], "de");
        assert_eq!(value["gender"], "fem");
        assert_eq!(value["stats"]["total"], 10);
        assert_eq!(value["stats"]["kept"], 4);
        assert_eq!(value["stats"]["repetition_dropped"], 1);
        assert_eq!(value["target_output"], "train.de.target_filtered");
    }

    #[test]
    fn test_source_summary_fields() {
        let value = render(&source_summary());
        assert_eq!(value["command"], "source");
        assert_eq!(value["stats"]["feminine"], 2);
        assert_eq!(value["stats"]["masculine"], 3);
        assert_eq!(value["stats"]["skipped_long"], 1);
        assert_eq!(value["feminine_output"], "news.en.fem");
    }
}
