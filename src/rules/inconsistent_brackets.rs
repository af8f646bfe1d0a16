use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

const PAIRS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}'), ('<', '>')];

/// Source and target must open and close each bracket family the same
/// number of times. Flags the first mismatching pair in `PAIRS` order.
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() {
        return None;
    }
    for (open, close) in PAIRS {
        let src_open = unit.source.chars().filter(|c| c == open).count();
        let src_close = unit.source.chars().filter(|c| c == close).count();
        let tgt_open = unit.target.chars().filter(|c| c == open).count();
        let tgt_close = unit.target.chars().filter(|c| c == close).count();
        if src_open != tgt_open || src_close != tgt_close {
            return Some(QAIssue::new(
                unit,
                IssueType::InconsistentBrackets,
                Severity::Error,
                format!(
                    "bracket '{open}{close}' count differs: source has {src_open}/{src_close}, target has {tgt_open}/{tgt_close}"
                ),
            ));
        }
    }
    None
}
