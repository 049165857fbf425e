//! genfilt CLI library
//!
//! This library provides the command-line interface for filtering
//! machine-translation corpora by grammatical gender.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

use clap::Parser;

/// Top-level command line
#[derive(Debug, Parser)]
#[command(name = "genfilt")]
#[command(version)]
#[command(about = "Filter MT corpora by grammatical gender", long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: commands::Commands,
}

impl Cli {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        self.command.execute()
    }
}
