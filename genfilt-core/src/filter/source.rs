//! Source-side filtering of an English corpus by closed wordlists
//!
//! A line is feminine-specific when it contains a feminine pronoun and no
//! masculine word at all; masculine-specific is symmetric. Everything else
//! is dropped.

use super::{create_output, open_input, read_line, with_suffix, ProgressFn, ProgressReporter};
use crate::config::FilterConfig;
use crate::error::Result;
use crate::labels::{Gender, GenderLabel};
use crate::text::strip_punctuation;
use crate::wordlists;
use serde::Serialize;
use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Counts from one source-filter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceStats {
    /// Lines read, skipped ones included
    pub total: u64,
    /// Lines written to the feminine output
    pub feminine: u64,
    /// Lines written to the masculine output
    pub masculine: u64,
    /// Lines skipped for exceeding the length limit
    pub skipped_long: u64,
}

/// Input and output locations of a source-filter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    /// Monolingual input
    pub input: PathBuf,
    /// Feminine-specific lines
    pub feminine_output: PathBuf,
    /// Masculine-specific lines
    pub masculine_output: PathBuf,
}

impl SourcePaths {
    /// Input with default `<input>.fem` / `<input>.msc` outputs
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        Self {
            feminine_output: with_suffix(&input, &format!(".{}", Gender::Feminine.code())),
            masculine_output: with_suffix(&input, &format!(".{}", Gender::Masculine.code())),
            input,
        }
    }

    /// Override either output location
    pub fn with_outputs(mut self, feminine: Option<PathBuf>, masculine: Option<PathBuf>) -> Self {
        if let Some(feminine) = feminine {
            self.feminine_output = feminine;
        }
        if let Some(masculine) = masculine {
            self.masculine_output = masculine;
        }
        self
    }
}

/// Words of a line in original case and lowercased, punctuation removed
pub fn line_words(line: &str) -> HashSet<String> {
    let cleaned = strip_punctuation(line.trim());
    let mut words: HashSet<String> = cleaned.split_whitespace().map(str::to_string).collect();
    words.extend(cleaned.to_lowercase().split_whitespace().map(str::to_string));
    words
}

/// Length of a line in characters, counting a `\r\n` terminator as one
pub fn line_length(line: &str) -> usize {
    match line.strip_suffix("\r\n") {
        Some(body) => body.chars().count() + 1,
        None => line.chars().count(),
    }
}

/// Gender of a line by wordlist membership
pub fn source_gender(line: &str) -> GenderLabel {
    let words = line_words(line);
    let has_any = |set: &HashSet<&'static str>| words.iter().any(|w| set.contains(w.as_str()));

    let feminine_pronoun = has_any(wordlists::feminine_pronouns());
    let masculine_pronoun = has_any(wordlists::masculine_pronouns());
    let feminine_word = has_any(wordlists::feminine_words());
    let masculine_word = has_any(wordlists::masculine_words());

    if feminine_pronoun && !masculine_word {
        GenderLabel::Feminine
    } else if masculine_pronoun && !feminine_word {
        GenderLabel::Masculine
    } else {
        GenderLabel::Other
    }
}

/// Splits a corpus into feminine- and masculine-specific lines
pub struct SourceFilter {
    config: FilterConfig,
    progress: Option<ProgressFn>,
}

impl SourceFilter {
    /// Create a filter
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            progress: None,
        }
    }

    /// Install a progress callback
    pub fn with_progress(mut self, progress: ProgressFn) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Filter a line stream into the two outputs
    pub fn filter<R, WF, WM>(
        &self,
        mut input: R,
        feminine_out: &mut WF,
        masculine_out: &mut WM,
        input_name: &str,
    ) -> Result<SourceStats>
    where
        R: BufRead,
        WF: Write,
        WM: Write,
    {
        let reporter =
            ProgressReporter::new(self.config.progress_interval, input_name, self.progress.as_ref());
        let mut stats = SourceStats::default();
        let mut line = String::new();

        while read_line(&mut input, &mut line)? {
            stats.total += 1;
            reporter.line_read(stats.total);

            if line_length(&line) > self.config.max_line_chars {
                stats.skipped_long += 1;
                continue;
            }
            match source_gender(&line) {
                GenderLabel::Feminine => {
                    feminine_out.write_all(line.as_bytes())?;
                    stats.feminine += 1;
                }
                GenderLabel::Masculine => {
                    masculine_out.write_all(line.as_bytes())?;
                    stats.masculine += 1;
                }
                GenderLabel::Other => {}
            }
        }

        feminine_out.flush()?;
        masculine_out.flush()?;
        Ok(stats)
    }

    /// Filter a corpus on disk
    ///
    /// The input is opened before either output is created.
    pub fn filter_files(&self, paths: &SourcePaths) -> Result<SourceStats> {
        let input = open_input(&paths.input)?;
        let mut feminine_out = create_output(&paths.feminine_output)?;
        let mut masculine_out = create_output(&paths.masculine_output)?;

        let stats = self.filter(
            input,
            &mut feminine_out,
            &mut masculine_out,
            &paths.input.display().to_string(),
        )?;

        log::info!("Read {} lines from {}", stats.total, paths.input.display());
        log::info!(
            "Wrote {} feminine lines to {}",
            stats.feminine,
            paths.feminine_output.display()
        );
        log::info!(
            "Wrote {} masculine lines to {}",
            stats.masculine,
            paths.masculine_output.display()
        );
        Ok(stats)
    }
}
