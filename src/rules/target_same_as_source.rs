use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

/// The target is, character-for-character after case folding and
/// trimming, the same as the source. Skips short or non-alphabetic
/// sources, where identity is expected (numbers, codes, single letters).
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() {
        return None;
    }
    let source = unit.source.trim();
    if source.chars().count() < 3 || !source.chars().any(|c| c.is_alphabetic()) {
        return None;
    }
    if source.to_lowercase() != unit.target.trim().to_lowercase() {
        return None;
    }
    Some(QAIssue::new(
        unit,
        IssueType::TargetSameAsSource,
        Severity::Info,
        "translation is identical to the source",
    ))
}
