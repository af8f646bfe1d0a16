use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

fn tag_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</?([A-Za-z][\w:-]*)").unwrap())
}

/// Every tag name used in the target must also appear somewhere in the
/// source; a translator should never invent a new markup element.
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() {
        return None;
    }
    let re = tag_name_re();
    let source_tags: HashSet<&str> = re.captures_iter(&unit.source).map(|c| c.get(1).unwrap().as_str()).collect();
    let mut extra: Vec<&str> = re
        .captures_iter(&unit.target)
        .map(|c| c.get(1).unwrap().as_str())
        .filter(|t| !source_tags.contains(t))
        .collect();
    extra.dedup();
    if extra.is_empty() {
        return None;
    }
    Some(QAIssue::new(
        unit,
        IssueType::InvalidXmlTags,
        Severity::Warning,
        format!("target uses tag(s) not present in source: {}", extra.join(", ")),
    ))
}
