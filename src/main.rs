//! `transqa` CLI application entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use transqa::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Arguments::parse();
    match transqa::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitStatus::Failure.into()
        }
    }
}
