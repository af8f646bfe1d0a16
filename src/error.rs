//! Error types for the translation QA engine.
//!
//! Mirrors `spec.md` §7: a `ParseError` carries the originating filename and
//! a short diagnostic with no partial `TranslationFile` returned, and a
//! `ConfigError` is raised only when a configuration field is present but
//! invalid (absent fields fall back to defaults silently).

use thiserror::Error;

/// Failure to decode a translation bundle.
#[derive(Debug, Error)]
#[error("{filename}: {message}")]
pub struct ParseError {
    pub filename: String,
    pub message: String,
}

impl ParseError {
    pub fn new(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_extension(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        Self::new(&filename, "unsupported or missing file extension")
    }
}

/// Failure to validate a `QAConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("maxLengthRatio must be within [1.0, 3.0], got {0}")]
    LengthRatioOutOfRange(f64),
    #[error("unknown rule tag: {0}")]
    UnknownRule(String),
}
