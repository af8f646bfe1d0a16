use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

const TERMINAL_MARKS: &[char] = &['.', '!', '?', ':', ';', ','];

/// The source's final terminal punctuation mark (if any) must match the
/// target's.
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() {
        return None;
    }
    let src_mark = unit.source.trim_end().chars().next_back().filter(|c| TERMINAL_MARKS.contains(c));
    let tgt_mark = unit.target.trim_end().chars().next_back().filter(|c| TERMINAL_MARKS.contains(c));

    if src_mark == tgt_mark {
        return None;
    }
    // Only flag when the source actually ends on a terminal mark; a
    // translator adding one where the source has none is not an error.
    let src_mark = src_mark?;

    let mut issue = QAIssue::new(
        unit,
        IssueType::InconsistentPunctuation,
        Severity::Warning,
        format!("source ends with '{src_mark}' but target does not match"),
    );
    if tgt_mark.is_none() {
        let suggestion = format!("{}{}", unit.target.trim_end(), src_mark);
        issue = issue.with_suggestion(suggestion);
    }
    Some(issue)
}
