use std::sync::OnceLock;

use regex::Regex;

use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").unwrap())
}

/// Source and target must contain the same count of numeric runs.
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() {
        return None;
    }
    let re = number_re();
    let src: Vec<&str> = re.find_iter(&unit.source).map(|m| m.as_str()).collect();
    let tgt: Vec<&str> = re.find_iter(&unit.target).map(|m| m.as_str()).collect();
    if src.len() == tgt.len() {
        return None;
    }
    Some(QAIssue::new(
        unit,
        IssueType::InconsistentNumbers,
        Severity::Warning,
        format!("number count differs: source has {src:?}, target has {tgt:?}"),
    ))
}
