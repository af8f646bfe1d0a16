use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

/// A unit whose target is present but consists only of whitespace.
/// Distinct from `missing_translation`, which fires on a wholly absent
/// target.
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() || !unit.target.trim().is_empty() {
        return None;
    }
    Some(QAIssue::new(
        unit,
        IssueType::EmptyTranslation,
        Severity::Error,
        "translation is blank (whitespace only)",
    ))
}
