use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

const SPECIALS: &[(char, &str)] = &[
    ('\n', "newline"),
    ('\t', "tab"),
    ('\\', "backslash"),
    ('"', "double quote"),
    ('\'', "single quote"),
];

/// Source and target must carry the same count of each escape-sensitive
/// special character.
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() {
        return None;
    }
    for (ch, label) in SPECIALS {
        let src = unit.source.chars().filter(|c| c == ch).count();
        let tgt = unit.target.chars().filter(|c| c == ch).count();
        if src != tgt {
            return Some(QAIssue::new(
                unit,
                IssueType::SpecialCharactersMismatch,
                Severity::Warning,
                format!("{label} count differs: source has {src}, target has {tgt}"),
            ));
        }
    }
    None
}
