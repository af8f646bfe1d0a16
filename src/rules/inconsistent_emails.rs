use std::sync::OnceLock;

use regex::Regex;

use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\w.+-]+@[\w-]+\.[\w.-]+").unwrap())
}

/// Source and target must contain the same count of email addresses.
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() {
        return None;
    }
    let re = email_re();
    let src = re.find_iter(&unit.source).count();
    let tgt = re.find_iter(&unit.target).count();
    if src == tgt {
        return None;
    }
    Some(QAIssue::new(
        unit,
        IssueType::InconsistentEmails,
        Severity::Warning,
        format!("email address count differs: source has {src}, target has {tgt}"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QAConfig;

    #[test]
    fn flags_dropped_email() {
        let unit = TranslationUnit::new("k", "Contact a@b.com", 1).with_target("Contactez-nous");
        let cfg = QAConfig::default();
        let units = vec![unit.clone()];
        let ctx = RuleContext::new(&units, &cfg, &[]);
        assert!(check(&unit, 0, &ctx).is_some());
    }

    #[test]
    fn ignores_matching_emails() {
        let unit = TranslationUnit::new("k", "Contact a@b.com", 1).with_target("Contactez a@b.com");
        let cfg = QAConfig::default();
        let units = vec![unit.clone()];
        let ctx = RuleContext::new(&units, &cfg, &[]);
        assert!(check(&unit, 0, &ctx).is_none());
    }
}
