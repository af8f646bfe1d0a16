use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

const MIN_SOURCE_LEN: usize = 5;
const MIN_WORD_LEN: usize = 3;
const RATIO_THRESHOLD: f64 = 0.5;

/// Flags a target that still reads like the source: more than half of the
/// source's significant words (longer than `MIN_WORD_LEN`) turn up
/// case-insensitively verbatim in the target.
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() || unit.source.trim().chars().count() < MIN_SOURCE_LEN {
        return None;
    }
    if unit.source.chars().all(|c| c.is_ascii_digit() || c.is_whitespace()) {
        return None;
    }

    let target_lower = unit.target.to_lowercase();
    let words: Vec<&str> = unit
        .source
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_WORD_LEN)
        .collect();
    if words.is_empty() {
        return None;
    }

    let matched = words
        .iter()
        .filter(|w| target_lower.contains(&w.to_lowercase()))
        .count();
    let ratio = matched as f64 / words.len() as f64;
    if ratio <= RATIO_THRESHOLD {
        return None;
    }
    Some(QAIssue::new(
        unit,
        IssueType::UntranslatedText,
        Severity::Warning,
        format!("translation still contains {:.0}% of the source's words verbatim", ratio * 100.0),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QAConfig;

    #[test]
    fn flags_copied_source() {
        let unit = TranslationUnit::new("k", "Please enter your password", 1)
            .with_target("Please enter your password");
        let cfg = QAConfig::default();
        let units = vec![unit.clone()];
        let ctx = RuleContext::new(&units, &cfg, &[]);
        assert!(check(&unit, 0, &ctx).is_some());
    }

    #[test]
    fn ignores_real_translation() {
        let unit = TranslationUnit::new("k", "Please enter your password", 1)
            .with_target("Veuillez saisir votre mot de passe");
        let cfg = QAConfig::default();
        let units = vec![unit.clone()];
        let ctx = RuleContext::new(&units, &cfg, &[]);
        assert!(check(&unit, 0, &ctx).is_none());
    }

    #[test]
    fn ignores_short_source() {
        let unit = TranslationUnit::new("k", "OK", 1).with_target("OK");
        let cfg = QAConfig::default();
        let units = vec![unit.clone()];
        let ctx = RuleContext::new(&units, &cfg, &[]);
        assert!(check(&unit, 0, &ctx).is_none());
    }
}
