//! Source command implementation

use super::{check_inputs, CommonArgs};
use crate::output::RunSummary;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use genfilt_core::{SourceFilter, SourcePaths};
use std::path::PathBuf;

/// Arguments for the source command
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// English input corpus
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Feminine output (default: <INPUT>.fem)
    #[arg(short, long, value_name = "FILE")]
    pub feminine_output: Option<PathBuf>,

    /// Masculine output (default: <INPUT>.msc)
    #[arg(short, long, value_name = "FILE")]
    pub masculine_output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl SourceArgs {
    /// Execute the source command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        check_inputs(&[self.input.as_path()])?;
        let config = self.common.load_config()?;
        let paths = SourcePaths::new(&self.input)
            .with_outputs(self.feminine_output.clone(), self.masculine_output.clone());

        let mut progress = ProgressReporter::new(self.common.quiet);
        progress.start(&self.input.display().to_string());
        let mut filter = SourceFilter::new(config);
        if let Some(callback) = progress.callback() {
            filter = filter.with_progress(callback);
        }

        let stats = filter
            .filter_files(&paths)
            .with_context(|| format!("Failed to filter {}", paths.input.display()))?;
        progress.finish(stats.total);

        self.common.print_summary(&RunSummary::Source {
            feminine_output: paths.feminine_output,
            masculine_output: paths.masculine_output,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn args(input: PathBuf) -> SourceArgs {
        SourceArgs {
            input,
            feminine_output: None,
            masculine_output: None,
            common: CommonArgs {
                config: None,
                summary: None,
                quiet: true,
                verbose: 0,
            },
        }
    }

    #[test]
    fn test_splits_into_default_outputs() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("news.en");
        fs::write(&input, "She sings.\nHe sings.\nWe sing.\n").unwrap();

        args(input).execute().unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("news.en.fem")).unwrap(),
            "She sings.\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("news.en.msc")).unwrap(),
            "He sings.\n"
        );
    }

    #[test]
    fn test_config_file_limits_line_length() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("news.en");
        fs::write(&input, "She sings a very long song.\nHe sings.\n").unwrap();

        let mut config = NamedTempFile::new().unwrap();
        writeln!(config, "max_line_chars = 12").unwrap();

        let mut args = args(input);
        args.common.config = Some(config.path().to_path_buf());
        args.execute().unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("news.en.fem")).unwrap(), "");
        assert_eq!(
            fs::read_to_string(dir.path().join("news.en.msc")).unwrap(),
            "He sings.\n"
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("news.en");
        fs::write(&input, "She sings.\n").unwrap();

        let mut config = NamedTempFile::new().unwrap();
        writeln!(config, "max_line_chars = 0").unwrap();

        let mut args = args(input);
        args.common.config = Some(config.path().to_path_buf());
        let err = args.execute().unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(!dir.path().join("news.en.fem").exists());
    }
}
