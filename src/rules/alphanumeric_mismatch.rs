use std::sync::OnceLock;

use regex::Regex;

use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z0-9]+").unwrap())
}

/// Source and target must use the same multiset of alphanumeric runs.
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() {
        return None;
    }
    let re = token_re();
    let mut src: Vec<&str> = re.find_iter(&unit.source).map(|m| m.as_str()).collect();
    let mut tgt: Vec<&str> = re.find_iter(&unit.target).map(|m| m.as_str()).collect();
    src.sort_unstable();
    tgt.sort_unstable();

    let missing: Vec<&str> = src.iter().filter(|t| !tgt.contains(t)).copied().collect();
    let extra: Vec<&str> = tgt.iter().filter(|t| !src.contains(t)).copied().collect();
    if missing.is_empty() && extra.is_empty() {
        return None;
    }
    Some(QAIssue::new(
        unit,
        IssueType::AlphanumericMismatch,
        Severity::Warning,
        format!(
            "alphanumeric tokens differ: missing in target {missing:?}, extra in target {extra:?}"
        ),
    ))
}
