//! CLI argument definitions using clap's derive API.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "transqa", author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the QA rule suite over one or more localization bundles
    Check(CheckArgs),
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Bundle files, or directories to scan recursively
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// JSON config file overriding default rule settings (`spec.md` §4.6)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Glossary file (xlsx/xls/tmx/csv/tsv) to enforce key-term consistency
    #[arg(long)]
    pub glossary: Option<PathBuf>,

    /// Override `maxLengthRatio` from the config file
    #[arg(long)]
    pub max_length_ratio: Option<f64>,

    /// Print one JSON `QAResult` per file instead of the cargo-style report
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
