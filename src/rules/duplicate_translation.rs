use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

/// Another unit exists with the identical non-empty (source, target) pair.
pub fn check(unit: &TranslationUnit, pos: usize, ctx: &RuleContext) -> Option<QAIssue> {
    if unit.source.trim().is_empty() || unit.target.trim().is_empty() {
        return None;
    }
    let has_duplicate = ctx
        .by_source
        .get(unit.source.as_str())
        .into_iter()
        .flatten()
        .any(|&i| i != pos && ctx.units[i].target == unit.target);
    if !has_duplicate {
        return None;
    }
    Some(QAIssue::new(
        unit,
        IssueType::DuplicateTranslation,
        Severity::Info,
        "another unit has an identical source/target pair",
    ))
}
