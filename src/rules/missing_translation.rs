use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

/// A unit whose source has content but whose target is entirely absent.
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.source.trim().is_empty() || !unit.target.is_empty() {
        return None;
    }
    Some(QAIssue::new(
        unit,
        IssueType::MissingTranslation,
        Severity::Error,
        "translation is missing",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QAConfig;

    #[test]
    fn flags_empty_target() {
        let unit = TranslationUnit::new("k", "Hello", 1);
        let cfg = QAConfig::default();
        let units = vec![unit.clone()];
        let ctx = RuleContext::new(&units, &cfg, &[]);
        let issue = check(&unit, 0, &ctx).unwrap();
        assert_eq!(issue.issue_type, IssueType::MissingTranslation);
        assert_eq!(issue.severity, Severity::Error);
    }

    #[test]
    fn ignores_unit_with_target() {
        let unit = TranslationUnit::new("k", "Hello", 1).with_target("Bonjour");
        let cfg = QAConfig::default();
        let units = vec![unit.clone()];
        let ctx = RuleContext::new(&units, &cfg, &[]);
        assert!(check(&unit, 0, &ctx).is_none());
    }

    #[test]
    fn ignores_unit_with_empty_source() {
        let unit = TranslationUnit::new("k", "", 1);
        let cfg = QAConfig::default();
        let units = vec![unit.clone()];
        let ctx = RuleContext::new(&units, &cfg, &[]);
        assert!(check(&unit, 0, &ctx).is_none());
    }
}
