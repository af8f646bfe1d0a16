//! Core data model shared by the parser, the glossary loader, and the rule
//! library: `TranslationUnit`, `TranslationFile`, `GlossaryTerm`, `QAIssue`,
//! and `QAResult`. See `spec.md` §3 for the full invariants.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::next_id;

/// A single translatable segment, as produced by a bundle parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationUnit {
    pub id: String,
    pub key: String,
    pub source: String,
    pub target: String,
    pub context: Option<String>,
    pub notes: Option<String>,
    pub line: Option<usize>,
    /// 1-based, dense, monotonically increasing within a file.
    pub index: usize,
}

impl TranslationUnit {
    /// Builds a unit with a freshly generated id. `index` is assigned by the
    /// caller (the decoder), which tracks document order.
    pub fn new(key: impl Into<String>, source: impl Into<String>, index: usize) -> Self {
        Self {
            id: next_id("u"),
            key: key.into(),
            source: source.into(),
            target: String::new(),
            context: None,
            notes: None,
            line: None,
            index,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// An ordered, finite collection of units produced by decoding one input
/// document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationFile {
    pub id: String,
    pub filename: String,
    pub format: String,
    pub source_language: String,
    pub target_language: String,
    pub units: Vec<TranslationUnit>,
    pub byte_size: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl TranslationFile {
    pub fn new(filename: impl Into<String>, format: impl Into<String>, byte_size: u64) -> Self {
        Self {
            id: next_id("f"),
            filename: filename.into(),
            format: format.into(),
            source_language: "en".to_string(),
            target_language: String::new(),
            units: Vec::new(),
            byte_size,
            uploaded_at: Utc::now(),
        }
    }
}

/// A required (source, target) glossary pair plus an optional context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub source: String,
    pub target: String,
    pub context: Option<String>,
}

/// Severity of a `QAIssue`. Ordering only affects filtering/display, never
/// analysis semantics (`spec.md` GLOSSARY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Closed enumeration of the 23 issue kinds named in `spec.md` §4.4. The
/// last two are declared but never emitted (`inconsistent_case`,
/// `potentially_incorrect_translation`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    MissingTranslation,
    EmptyTranslation,
    LeadingTrailingSpaces,
    InconsistentBrackets,
    InconsistentPlaceholders,
    InconsistentPunctuation,
    InconsistentNumbers,
    InconsistentUrls,
    InconsistentEmails,
    TooLongTranslation,
    DuplicateTranslation,
    InvalidHtmlTags,
    InvalidXmlTags,
    SpecialCharactersMismatch,
    FormattingIssues,
    UntranslatedText,
    TargetSameAsSource,
    KeyTermMismatch,
    AlphanumericMismatch,
    InconsistentSource,
    InconsistentTarget,
    InconsistentCase,
    PotentiallyIncorrectTranslation,
}

impl IssueType {
    /// The stable machine-readable tag. Renaming these is a breaking change
    /// (`spec.md` §6).
    pub fn tag(self) -> &'static str {
        match self {
            IssueType::MissingTranslation => "missing_translation",
            IssueType::EmptyTranslation => "empty_translation",
            IssueType::LeadingTrailingSpaces => "leading_trailing_spaces",
            IssueType::InconsistentBrackets => "inconsistent_brackets",
            IssueType::InconsistentPlaceholders => "inconsistent_placeholders",
            IssueType::InconsistentPunctuation => "inconsistent_punctuation",
            IssueType::InconsistentNumbers => "inconsistent_numbers",
            IssueType::InconsistentUrls => "inconsistent_urls",
            IssueType::InconsistentEmails => "inconsistent_emails",
            IssueType::TooLongTranslation => "too_long_translation",
            IssueType::DuplicateTranslation => "duplicate_translation",
            IssueType::InvalidHtmlTags => "invalid_html_tags",
            IssueType::InvalidXmlTags => "invalid_xml_tags",
            IssueType::SpecialCharactersMismatch => "special_characters_mismatch",
            IssueType::FormattingIssues => "formatting_issues",
            IssueType::UntranslatedText => "untranslated_text",
            IssueType::TargetSameAsSource => "target_same_as_source",
            IssueType::KeyTermMismatch => "key_term_mismatch",
            IssueType::AlphanumericMismatch => "alphanumeric_mismatch",
            IssueType::InconsistentSource => "inconsistent_source",
            IssueType::InconsistentTarget => "inconsistent_target",
            IssueType::InconsistentCase => "inconsistent_case",
            IssueType::PotentiallyIncorrectTranslation => "potentially_incorrect_translation",
        }
    }
}

/// A single finding from one rule on one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QAIssue {
    pub id: String,
    pub unit_id: String,
    pub issue_type: IssueType,
    pub severity: Severity,
    pub message: String,
    pub source: String,
    pub target: String,
    pub key: String,
    pub suggestion: Option<String>,
    pub index: usize,
}

impl QAIssue {
    pub fn new(
        unit: &TranslationUnit,
        issue_type: IssueType,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: next_id("i"),
            unit_id: unit.id.clone(),
            issue_type,
            severity,
            message: message.into(),
            source: unit.source.clone(),
            target: unit.target.clone(),
            key: unit.key.clone(),
            suggestion: None,
            index: unit.index,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Aggregate statistics over a `QAResult`'s issues.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QAStats {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
    pub by_type: HashMap<String, usize>,
}

/// The sole programmatic output of the analyzer driver (`spec.md` §6).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QAResult {
    pub file_id: String,
    pub filename: String,
    pub total_units: usize,
    pub issues: Vec<QAIssue>,
    pub stats: QAStats,
}

impl QAResult {
    /// Builds the result from an already unit-order/rule-order-sorted issue
    /// list, computing the aggregate statistics in one pass.
    pub fn from_issues(file: &TranslationFile, issues: Vec<QAIssue>) -> Self {
        let mut stats = QAStats {
            total: issues.len(),
            ..Default::default()
        };
        for issue in &issues {
            match issue.severity {
                Severity::Error => stats.errors += 1,
                Severity::Warning => stats.warnings += 1,
                Severity::Info => stats.info += 1,
            }
            *stats.by_type.entry(issue.issue_type.tag().to_string()).or_insert(0) += 1;
        }

        Self {
            file_id: file.id.clone(),
            filename: file.filename.clone(),
            total_units: file.units.len(),
            issues,
            stats,
        }
    }
}
