use std::sync::OnceLock;

use regex::Regex;

use crate::model::{IssueType, QAIssue, Severity, TranslationUnit};
use crate::rule_context::RuleContext;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9]*)\b[^>]*?(/?)>").unwrap())
}

/// Checks that HTML tags in the target form a well-nested tree: every
/// opening tag is eventually closed in LIFO order, and no stray closing tag
/// appears.
pub fn check(unit: &TranslationUnit, _pos: usize, _ctx: &RuleContext) -> Option<QAIssue> {
    if unit.target.is_empty() {
        return None;
    }
    let mut stack: Vec<String> = Vec::new();
    for cap in tag_re().captures_iter(&unit.target) {
        let closing = &cap[1] == "/";
        let name = cap[2].to_lowercase();
        let self_closing = &cap[3] == "/";

        if self_closing || VOID_ELEMENTS.contains(&name.as_str()) {
            continue;
        }
        if closing {
            match stack.last() {
                Some(top) if *top == name => {
                    stack.pop();
                }
                _ => {
                    return Some(QAIssue::new(
                        unit,
                        IssueType::InvalidHtmlTags,
                        Severity::Error,
                        format!("unmatched closing tag </{name}>"),
                    ));
                }
            }
        } else {
            stack.push(name);
        }
    }
    if let Some(unclosed) = stack.first() {
        return Some(QAIssue::new(
            unit,
            IssueType::InvalidHtmlTags,
            Severity::Error,
            format!("unclosed tag <{unclosed}>"),
        ));
    }
    None
}
