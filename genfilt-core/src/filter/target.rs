//! Target-side filtering of a parallel corpus

use super::{create_output, open_input, read_line, with_suffix, ProgressFn, ProgressReporter};
use crate::classifier::WordGenderClassifier;
use crate::config::FilterConfig;
use crate::error::Result;
use crate::labels::Gender;
use crate::matcher::GenderMatcher;
use crate::text::whitespace_token_count;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Counts from one target-filter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    /// Sentence pairs read
    pub total: u64,
    /// Sentence pairs written
    pub kept: u64,
    /// Pairs dropped by the repetition heuristic
    pub repetition_dropped: u64,
    /// Pairs where one side had already run out of lines
    pub misaligned: u64,
}

/// Input and output locations of a target-filter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPaths {
    /// Source side of the parallel input
    pub source_input: PathBuf,
    /// Target side of the parallel input
    pub target_input: PathBuf,
    /// Source side of the kept pairs
    pub source_output: PathBuf,
    /// Target side of the kept pairs
    pub target_output: PathBuf,
}

impl TargetPaths {
    /// Suffix appended to input names for the default outputs
    pub const DEFAULT_SUFFIX: &'static str = ".target_filtered";

    /// Inputs with default `<input>.target_filtered` outputs
    pub fn new(source_input: impl Into<PathBuf>, target_input: impl Into<PathBuf>) -> Self {
        let source_input = source_input.into();
        let target_input = target_input.into();
        Self {
            source_output: with_suffix(&source_input, Self::DEFAULT_SUFFIX),
            target_output: with_suffix(&target_input, Self::DEFAULT_SUFFIX),
            source_input,
            target_input,
        }
    }

    /// Override either output location
    pub fn with_outputs(mut self, source: Option<PathBuf>, target: Option<PathBuf>) -> Self {
        if let Some(source) = source {
            self.source_output = source;
        }
        if let Some(target) = target {
            self.target_output = target;
        }
        self
    }
}

/// Keeps sentence pairs whose target side matches a requested gender
pub struct TargetFilter<C> {
    matcher: GenderMatcher<C>,
    config: FilterConfig,
    progress: Option<ProgressFn>,
}

impl<C: WordGenderClassifier> TargetFilter<C> {
    /// Create a filter around a classifier
    pub fn new(classifier: C, config: FilterConfig) -> Self {
        Self {
            matcher: GenderMatcher::new(classifier),
            config,
            progress: None,
        }
    }

    /// Install a progress callback
    pub fn with_progress(mut self, progress: ProgressFn) -> Self {
        self.progress = Some(progress);
        self
    }

    /// The sentence matcher
    pub fn matcher(&self) -> &GenderMatcher<C> {
        &self.matcher
    }

    /// Whether a target line is degenerate repetition of its source
    pub fn is_repetitive(&self, source: &str, target: &str) -> bool {
        whitespace_token_count(target)
            > whitespace_token_count(source).saturating_mul(self.config.repetition_factor)
    }

    /// Filter aligned line streams
    ///
    /// Lines are paired by position. When one stream ends first its missing
    /// lines are read as empty strings and processing continues to the end
    /// of the longer stream.
    pub fn filter<RS, RT, WS, WT>(
        &self,
        mut source: RS,
        mut target: RT,
        source_out: &mut WS,
        target_out: &mut WT,
        gender: Gender,
        input_name: &str,
    ) -> Result<FilterStats>
    where
        RS: BufRead,
        RT: BufRead,
        WS: Write,
        WT: Write,
    {
        let reporter =
            ProgressReporter::new(self.config.progress_interval, input_name, self.progress.as_ref());
        let mut stats = FilterStats::default();
        let mut src_line = String::new();
        let mut trg_line = String::new();

        loop {
            let has_src = read_line(&mut source, &mut src_line)?;
            let has_trg = read_line(&mut target, &mut trg_line)?;
            if !has_src && !has_trg {
                break;
            }
            if has_src != has_trg {
                stats.misaligned += 1;
            }
            stats.total += 1;
            reporter.line_read(stats.total);

            if self.is_repetitive(&src_line, &trg_line) {
                stats.repetition_dropped += 1;
                continue;
            }
            if self.matcher.matches_gender(&trg_line, gender) {
                source_out.write_all(src_line.as_bytes())?;
                target_out.write_all(trg_line.as_bytes())?;
                stats.kept += 1;
            }
        }

        if stats.misaligned > 0 {
            log::warn!(
                "Source and target of {} differ in length by {} lines; missing lines were read as empty",
                input_name,
                stats.misaligned
            );
        }
        source_out.flush()?;
        target_out.flush()?;
        Ok(stats)
    }

    /// Filter a parallel corpus on disk
    ///
    /// Both inputs are opened before any output is created.
    pub fn filter_files(&self, paths: &TargetPaths, gender: Gender) -> Result<FilterStats> {
        let source = open_input(&paths.source_input)?;
        let target = open_input(&paths.target_input)?;
        let mut source_out = create_output(&paths.source_output)?;
        let mut target_out = create_output(&paths.target_output)?;

        log::debug!(
            "Target filtering {} / {} for gender {} (repetition factor {})",
            paths.source_input.display(),
            paths.target_input.display(),
            gender,
            self.config.repetition_factor
        );

        let stats = self.filter(
            source,
            target,
            &mut source_out,
            &mut target_out,
            gender,
            &paths.target_input.display().to_string(),
        )?;

        log::info!(
            "Read {} lines from {} and {}",
            stats.total,
            paths.source_input.display(),
            paths.target_input.display()
        );
        log::info!(
            "Wrote {} lines to {} and {} for gender {}",
            stats.kept,
            paths.source_output.display(),
            paths.target_output.display(),
            gender
        );
        Ok(stats)
    }
}
