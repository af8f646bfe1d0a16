use std::sync::OnceLock;

use regex::Regex;

use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

struct Family {
    name: &'static str,
    pattern: fn() -> &'static Regex,
}

fn printf_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"%(?:\d+\$)?[sdif]").unwrap())
}

fn double_brace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{[^{}]+\}\}").unwrap())
}

fn shell_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{[^{}]+\}").unwrap())
}

fn colon_symbol_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r":[A-Za-z_][A-Za-z0-9_]*").unwrap())
}

fn python_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"%\([^()]+\)s").unwrap())
}

fn single_brace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{[^{}]+\}").unwrap())
}

/// Placeholder families checked in order, first mismatch wins
/// (`spec.md` §4.4 "Inconsistent placeholders").
const FAMILIES: &[Family] = &[
    Family { name: "printf", pattern: printf_re },
    Family { name: "double-brace", pattern: double_brace_re },
    Family { name: "shell", pattern: shell_re },
    Family { name: "colon-symbol", pattern: colon_symbol_re },
    Family { name: "python", pattern: python_re },
    Family { name: "single-brace", pattern: single_brace_re },
];

pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() {
        return None;
    }
    for family in FAMILIES {
        let re = (family.pattern)();
        let src_found: Vec<&str> = re.find_iter(&unit.source).map(|m| m.as_str()).collect();
        let tgt_found: Vec<&str> = re.find_iter(&unit.target).map(|m| m.as_str()).collect();
        if src_found.len() != tgt_found.len() {
            return Some(QAIssue::new(
                unit,
                IssueType::InconsistentPlaceholders,
                Severity::Error,
                format!(
                    "{} placeholders differ: source has {:?}, target has {:?}",
                    family.name, src_found, tgt_found
                ),
            ));
        }
    }
    None
}
