use regex::RegexBuilder;

use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

fn contains_word(haystack: &str, word: &str) -> bool {
    if word.trim().is_empty() {
        return false;
    }
    let pattern = format!(r"\b{}\b", regex::escape(word.trim()));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map(|re| re.is_match(haystack))
        .unwrap_or(false)
}

/// For every glossary term whose source word appears in this unit's source,
/// the term's target word must appear in this unit's target. Violations are
/// collected and reported as one issue naming every violated term.
pub fn check(unit: &TranslationUnit, _pos: usize, ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() || ctx.glossary.is_empty() {
        return None;
    }
    let mut violations: Vec<&str> = Vec::new();
    for term in ctx.glossary {
        if contains_word(&unit.source, &term.source) && !contains_word(&unit.target, &term.target) {
            violations.push(term.target.as_str());
        }
    }
    if violations.is_empty() {
        return None;
    }
    let issue = QAIssue::new(
        unit,
        IssueType::KeyTermMismatch,
        Severity::Warning,
        format!("expected glossary term(s) not found in translation: {}", violations.join(", ")),
    );
    Some(issue.with_suggestion(violations[0].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QAConfig;
    use crate::model::GlossaryTerm;

    fn glossary() -> Vec<GlossaryTerm> {
        vec![GlossaryTerm {
            source: "file".to_string(),
            target: "fichier".to_string(),
            context: None,
        }]
    }

    #[test]
    fn flags_missing_glossary_term() {
        let unit = TranslationUnit::new("k", "Open the file", 1).with_target("Ouvrir le document");
        let cfg = QAConfig::default();
        let glossary = glossary();
        let units = vec![unit.clone()];
        let ctx = RuleContext::new(&units, &cfg, &glossary);
        let issue = check(&unit, 0, &ctx).unwrap();
        assert_eq!(issue.suggestion.as_deref(), Some("fichier"));
    }

    #[test]
    fn ignores_correct_term_usage() {
        let unit = TranslationUnit::new("k", "Open the file", 1).with_target("Ouvrir le fichier");
        let cfg = QAConfig::default();
        let glossary = glossary();
        let units = vec![unit.clone()];
        let ctx = RuleContext::new(&units, &cfg, &glossary);
        assert!(check(&unit, 0, &ctx).is_none());
    }

    #[test]
    fn ignores_unit_where_source_term_absent() {
        let unit = TranslationUnit::new("k", "Open the folder", 1).with_target("Ouvrir le dossier");
        let cfg = QAConfig::default();
        let glossary = glossary();
        let units = vec![unit.clone()];
        let ctx = RuleContext::new(&units, &cfg, &glossary);
        assert!(check(&unit, 0, &ctx).is_none());
    }
}
