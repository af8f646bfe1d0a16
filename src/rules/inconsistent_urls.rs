use std::sync::OnceLock;

use regex::Regex;

use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://\S+").unwrap())
}

/// Source and target must contain the same count of URLs.
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() {
        return None;
    }
    let re = url_re();
    let src = re.find_iter(&unit.source).count();
    let tgt = re.find_iter(&unit.target).count();
    if src == tgt {
        return None;
    }
    Some(QAIssue::new(
        unit,
        IssueType::InconsistentUrls,
        Severity::Warning,
        format!("URL count differs: source has {src}, target has {tgt}"),
    ))
}
