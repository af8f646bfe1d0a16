use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

/// Another unit shares this unit's source but was translated differently —
/// the same original text was rendered two different ways.
pub fn check(unit: &TranslationUnit, pos: usize, ctx: &RuleContext) -> Option<QAIssue> {
    if unit.source.trim().is_empty() || unit.target.trim().is_empty() {
        return None;
    }
    let conflict = ctx
        .by_source
        .get(unit.source.as_str())
        .into_iter()
        .flatten()
        .any(|&i| i != pos && !ctx.units[i].target.trim().is_empty() && ctx.units[i].target != unit.target);
    if !conflict {
        return None;
    }
    Some(QAIssue::new(
        unit,
        IssueType::InconsistentTarget,
        Severity::Warning,
        "this source also appears translated differently elsewhere in the file",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QAConfig;

    #[test]
    fn flags_same_source_different_target() {
        let units = vec![
            TranslationUnit::new("a", "Cancel", 1).with_target("Annuler"),
            TranslationUnit::new("b", "Cancel", 2).with_target("Abandonner"),
        ];
        let cfg = QAConfig::default();
        let ctx = RuleContext::new(&units, &cfg, &[]);
        assert!(check(&units[0], 0, &ctx).is_some());
    }

    #[test]
    fn ignores_consistent_translations() {
        let units = vec![
            TranslationUnit::new("a", "Cancel", 1).with_target("Annuler"),
            TranslationUnit::new("b", "Cancel", 2).with_target("Annuler"),
        ];
        let cfg = QAConfig::default();
        let ctx = RuleContext::new(&units, &cfg, &[]);
        assert!(check(&units[0], 0, &ctx).is_none());
    }
}
