//! CLI command dispatcher: collects bundle files, parses, analyzes, and
//! reports. See `spec.md` §6 for the external interface contract.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::analyzer::analyze;
use crate::cli::args::{Arguments, CheckArgs, Command};
use crate::cli::exit_status::ExitStatus;
use crate::cli::report;
use crate::config::QAConfig;
use crate::detect::detect;
use crate::glossary;
use crate::parsers;

pub fn run(args: Arguments) -> Result<ExitStatus> {
    match args.command {
        Some(Command::Check(check_args)) => check(check_args),
        None => anyhow::bail!("no command provided; use --help to see available commands"),
    }
}

fn check(args: CheckArgs) -> Result<ExitStatus> {
    let mut config = load_config(&args)?;
    if let Some(ratio) = args.max_length_ratio {
        config.max_length_ratio = ratio;
    }
    if let Some(glossary_path) = &args.glossary {
        let bytes = fs::read(glossary_path)
            .with_context(|| format!("reading glossary {}", glossary_path.display()))?;
        let filename = filename_of(glossary_path);
        config.glossary = Some(glossary::load(&bytes, &filename)?);
    }
    config
        .validate()
        .with_context(|| "invalid configuration")?;

    let files = collect_bundle_files(&args.paths)?;
    if files.is_empty() {
        anyhow::bail!("no recognized bundle files found in the given paths");
    }

    let mut results = Vec::with_capacity(files.len());
    let mut parse_errors = 0usize;

    for path in &files {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let filename = filename_of(path);
        match parsers::parse(&bytes, &filename) {
            Ok(file) => {
                tracing::debug!(file = %filename, units = file.units.len(), "parsed bundle");
                results.push(analyze(&file, &config));
            }
            Err(err) => {
                parse_errors += 1;
                tracing::warn!(file = %filename, error = %err, "failed to parse bundle");
                if args.verbose {
                    eprintln!("warning: {err}");
                }
            }
        }
    }

    if args.json {
        report::print_json(&results)?;
    } else {
        report::print_text(&results, args.verbose);
    }

    if parse_errors > 0 && !args.verbose {
        eprintln!(
            "warning: {parse_errors} file(s) could not be parsed (use -v for details)"
        );
    }

    let has_errors = results
        .iter()
        .any(|r| r.stats.errors > 0);
    Ok(if has_errors {
        ExitStatus::IssuesFound
    } else {
        ExitStatus::Success
    })
}

fn load_config(args: &CheckArgs) -> Result<QAConfig> {
    match &args.config {
        Some(path) => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            Ok(QAConfig::from_json(&bytes)
                .with_context(|| format!("parsing config {}", path.display()))?)
        }
        None => Ok(QAConfig::default()),
    }
}

fn collect_bundle_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
                if entry.file_type().is_file() && is_bundle(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn is_bundle(path: &Path) -> bool {
    detect(&filename_of(path)).is_some()
}

fn filename_of(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}
