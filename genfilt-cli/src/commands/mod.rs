//! CLI command implementations

use crate::config;
use crate::error::CliError;
use crate::output::{self, RunSummary, SummaryFormat};
use anyhow::Result;
use clap::{Args, Subcommand};
use genfilt_core::{FilterConfig, Gender, TargetLanguage};
use std::io;
use std::path::{Path, PathBuf};

pub mod source;
pub mod target;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Keep sentence pairs whose target side has the requested gender
    Target(target::TargetArgs),

    /// Split an English corpus into feminine and masculine lines
    Source(source::SourceArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Target(args) => args.execute(),
            Commands::Source(args) => args.execute(),
            Commands::List { subcommand } => {
                let mut stdout = io::stdout().lock();
                subcommand.write_to(&mut stdout)?;
                Ok(())
            }
        }
    }
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List supported target languages
    Languages,

    /// List requestable genders
    Genders,
}

impl ListCommands {
    /// Write the listing, one `code<TAB>name` row per entry
    pub fn write_to<W: io::Write>(self, out: &mut W) -> io::Result<()> {
        match self {
            ListCommands::Languages => {
                for language in TargetLanguage::ALL {
                    writeln!(out, "{}\t{}", language.code(), language.name())?;
                }
            }
            ListCommands::Genders => {
                for gender in Gender::ALL {
                    let name = match gender {
                        Gender::Feminine => "feminine",
                        Gender::Masculine => "masculine",
                    };
                    writeln!(out, "{}\t{}", gender.code(), name)?;
                }
            }
        }
        Ok(())
    }
}

/// Options shared by the filter commands
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a run summary to stdout
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub summary: Option<SummaryFormat>,

    /// Suppress logging and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };

        // a logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }

    /// Load the configuration file, or defaults
    pub fn load_config(&self) -> Result<FilterConfig, CliError> {
        config::load(self.config.as_deref())
    }

    /// Print the run summary if one was requested
    pub fn print_summary(&self, summary: &RunSummary) -> Result<()> {
        if let Some(format) = self.summary {
            output::formatter(format, io::stdout().lock()).write_summary(summary)?;
        }
        Ok(())
    }
}

/// Fail early when an input is missing
pub(crate) fn check_inputs(inputs: &[&Path]) -> Result<(), CliError> {
    for input in inputs {
        if !input.is_file() {
            return Err(CliError::FileNotFound(input.display().to_string()));
        }
    }
    Ok(())
}
