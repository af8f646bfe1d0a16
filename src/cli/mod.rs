//! CLI front end (C9): argument parsing, command dispatch, and reporting
//! for the `transqa` binary. See `SPEC_FULL.md` §4.8.
//!
//! ## Module structure
//!
//! - `args`: clap-derived argument definitions
//! - `run`: command dispatcher (file discovery, parse, analyze)
//! - `report`: cargo-style and JSON output
//! - `exit_status`: process exit codes

use std::process::ExitCode;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub mod args;
pub mod exit_status;
pub mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitCode::from(0));
    };
    let status = run::run(args)?;
    Ok(status.into())
}
