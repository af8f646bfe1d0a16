use std::sync::OnceLock;

use regex::Regex;

use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

fn double_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").unwrap())
}

/// Catches formatting artifacts the source doesn't have: runs of multiple
/// consecutive spaces, or CRLF line endings mixed into an otherwise LF
/// target. Checked in that order; at most one fires per unit.
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() {
        return None;
    }
    if double_space_re().is_match(&unit.target) && !double_space_re().is_match(&unit.source) {
        return Some(QAIssue::new(
            unit,
            IssueType::FormattingIssues,
            Severity::Info,
            "target has multiple consecutive spaces",
        ));
    }
    if unit.target.contains("\r\n") && !unit.source.contains("\r\n") {
        return Some(QAIssue::new(
            unit,
            IssueType::FormattingIssues,
            Severity::Info,
            "target has mixed line endings (CRLF)",
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QAConfig;

    #[test]
    fn flags_double_spaces() {
        let unit = TranslationUnit::new("k", "Hello there", 1).with_target("Salut  toi");
        let cfg = QAConfig::default();
        let units = vec![unit.clone()];
        let ctx = RuleContext::new(&units, &cfg, &[]);
        let issue = check(&unit, 0, &ctx).unwrap();
        assert!(issue.message.contains("consecutive spaces"));
    }

    #[test]
    fn flags_mixed_line_endings() {
        let unit = TranslationUnit::new("k", "A\nB", 1).with_target("A\r\nB");
        let cfg = QAConfig::default();
        let units = vec![unit.clone()];
        let ctx = RuleContext::new(&units, &cfg, &[]);
        let issue = check(&unit, 0, &ctx).unwrap();
        assert!(issue.message.contains("CRLF"));
    }

    #[test]
    fn ignores_clean_target() {
        let unit = TranslationUnit::new("k", "Hello there", 1).with_target("Salut toi");
        let cfg = QAConfig::default();
        let units = vec![unit.clone()];
        let ctx = RuleContext::new(&units, &cfg, &[]);
        assert!(check(&unit, 0, &ctx).is_none());
    }
}
