use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

/// Another unit shares this unit's target but was translated from a
/// different source — the same target text came from two distinct
/// originals.
pub fn check(unit: &TranslationUnit, pos: usize, ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.trim().is_empty() {
        return None;
    }
    let conflict = ctx
        .by_target
        .get(unit.target.as_str())
        .into_iter()
        .flatten()
        .any(|&i| i != pos && ctx.units[i].source != unit.source);
    if !conflict {
        return None;
    }
    Some(QAIssue::new(
        unit,
        IssueType::InconsistentSource,
        Severity::Warning,
        "this target also appears for a different source elsewhere in the file",
    ))
}
