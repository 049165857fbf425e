//! Plain text summary formatter

use super::{RunSummary, SummaryFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one count per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> SummaryFormatter for TextFormatter<W> {
    fn write_summary(&mut self, summary: &RunSummary) -> Result<()> {
        match summary {
            RunSummary::Target {
                language,
                gender,
                source_output,
                target_output,
                stats,
            } => {
                writeln!(self.writer, "Read {} lines ({})", stats.total, language)?;
                writeln!(
                    self.writer,
                    "Wrote {} lines to {} and {} for gender {}",
                    stats.kept,
                    source_output.display(),
                    target_output.display(),
                    gender
                )?;
                writeln!(
                    self.writer,
                    "Dropped {} repetitive lines",
                    stats.repetition_dropped
                )?;
                if stats.misaligned > 0 {
                    writeln!(self.writer, "Misaligned lines: {}", stats.misaligned)?;
                }
            }
            RunSummary::Source {
                feminine_output,
                masculine_output,
                stats,
            } => {
                writeln!(self.writer, "Read {} lines", stats.total)?;
                writeln!(
                    self.writer,
                    "Wrote {} feminine lines to {}",
                    stats.feminine,
                    feminine_output.display()
                )?;
                writeln!(
                    self.writer,
                    "Wrote {} masculine lines to {}",
                    stats.masculine,
                    masculine_output.display()
                )?;
                if stats.skipped_long > 0 {
                    writeln!(self.writer, "Skipped {} long lines", stats.skipped_long)?;
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
