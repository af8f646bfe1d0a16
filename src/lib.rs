//! `transqa`: a deterministic, offline translation quality assurance engine
//! for bilingual localization bundles.
//!
//! The pipeline is: detect the bundle format (`detect`), decode it into a
//! normalized `TranslationFile` (`parsers`), optionally load a glossary
//! (`glossary`), then run the rule library over it (`rules`, `analyzer`)
//! under a `QAConfig` to produce a `QAResult`. See `SPEC_FULL.md` for the
//! full component breakdown.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod glossary;
mod ids;
pub mod model;
pub mod parsers;
pub mod rule_context;
pub mod rules;

pub use analyzer::analyze;
pub use config::QAConfig;
pub use error::{ConfigError, ParseError};
pub use model::{QAIssue, QAResult, TranslationFile, TranslationUnit};
