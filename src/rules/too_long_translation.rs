use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

/// The target's character length relative to the source must not exceed
/// `QAConfig.max_length_ratio` (`spec.md` §4.6).
pub fn check(unit: &TranslationUnit, _pos: usize, ctx: &RuleContext) -> Option<QAIssue> {
    let src_len = unit.source.chars().count();
    let tgt_len = unit.target.chars().count();
    if src_len == 0 || tgt_len == 0 {
        return None;
    }
    let ratio = tgt_len as f64 / src_len as f64;
    if ratio <= ctx.config.max_length_ratio {
        return None;
    }
    Some(QAIssue::new(
        unit,
        IssueType::TooLongTranslation,
        Severity::Warning,
        format!(
            "translation is {:.0}% of source length (limit {:.0}%)",
            ratio * 100.0,
            ctx.config.max_length_ratio * 100.0
        ),
    ))
}
