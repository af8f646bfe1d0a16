use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

/// Source and target must agree on whether they carry leading and
/// trailing whitespace; it's the disagreement that's flagged, not the
/// whitespace itself.
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() {
        return None;
    }
    let src_leading = unit.source.starts_with(char::is_whitespace);
    let src_trailing = unit.source.ends_with(char::is_whitespace);
    let tgt_leading = unit.target.starts_with(char::is_whitespace);
    let tgt_trailing = unit.target.ends_with(char::is_whitespace);

    if src_leading == tgt_leading && src_trailing == tgt_trailing {
        return None;
    }

    let mut suggestion = unit.target.trim().to_string();
    if src_leading {
        suggestion.insert(0, ' ');
    }
    if src_trailing {
        suggestion.push(' ');
    }

    Some(
        QAIssue::new(
            unit,
            IssueType::LeadingTrailingSpaces,
            Severity::Warning,
            "translation disagrees with source on leading or trailing whitespace",
        )
        .with_suggestion(suggestion),
    )
}
