//! Cargo-style issue reporting. Separate from the analyzer so the engine
//! can be driven purely as a library without pulling in terminal
//! formatting.

use std::io::{self, Write};

use colored::Colorize;

use crate::model::{QAResult, Severity};

const SUCCESS_MARK: &str = "\u{2713}";
const FAILURE_MARK: &str = "\u{2718}";

pub fn print_json(results: &[QAResult]) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for result in results {
        serde_json::to_writer(&mut handle, result)?;
        writeln!(handle)?;
    }
    Ok(())
}

pub fn print_text(results: &[QAResult], verbose: bool) {
    print_text_to(results, verbose, &mut io::stdout().lock());
}

fn print_text_to<W: Write>(results: &[QAResult], verbose: bool, writer: &mut W) {
    let mut total_errors = 0;
    let mut total_warnings = 0;
    let mut total_info = 0;

    for result in results {
        if result.issues.is_empty() {
            continue;
        }
        let _ = writeln!(writer, "{}", result.filename.bold());
        let max_width = result
            .issues
            .iter()
            .map(|i| i.index)
            .max()
            .map(|n| n.to_string().len())
            .unwrap_or(1);

        for issue in &result.issues {
            print_issue(issue, writer, max_width, verbose);
        }

        total_errors += result.stats.errors;
        total_warnings += result.stats.warnings;
        total_info += result.stats.info;
    }

    let total_problems = total_errors + total_warnings + total_info;
    if total_problems == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "checked {} file(s) - no issues found",
                results.len()
            )
            .green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "\n{} {} issue(s) ({} {}, {} {}, {} info)",
        FAILURE_MARK.red(),
        total_problems,
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 { "warning" } else { "warnings" }.yellow(),
        total_info,
    );
}

fn print_issue<W: Write>(issue: &crate::model::QAIssue, writer: &mut W, width: usize, verbose: bool) {
    let severity_str = match issue.severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
        Severity::Info => "info".bold().cyan(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message,
        issue.issue_type.tag().dimmed().cyan()
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        "",
        "-->".blue(),
        issue.key
    );

    if verbose {
        let _ = writeln!(
            writer,
            "{:>width$} {} source: {}",
            "",
            "=".blue(),
            issue.source
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} target: {}",
            "",
            "=".blue(),
            issue.target
        );
    }

    if let Some(suggestion) = &issue.suggestion {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            suggestion
        );
    }

    let _ = writeln!(writer);
}
