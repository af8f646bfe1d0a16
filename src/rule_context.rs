//! Shared context threaded through every rule invocation: the full unit
//! list plus the relational indexes the C5 driver builds once per
//! `analyze` call (`spec.md` §9 — "Relational rules need indexes").

use std::collections::HashMap;

use crate::config::QAConfig;
use crate::model::{GlossaryTerm, TranslationUnit};

pub struct RuleContext<'a> {
    pub units: &'a [TranslationUnit],
    pub config: &'a QAConfig,
    pub glossary: &'a [GlossaryTerm],
    /// Exact source text -> indices of units sharing that exact source.
    pub by_source: HashMap<&'a str, Vec<usize>>,
    /// Exact target text -> indices of units sharing that exact target.
    pub by_target: HashMap<&'a str, Vec<usize>>,
}

impl<'a> RuleContext<'a> {
    pub fn new(units: &'a [TranslationUnit], config: &'a QAConfig, glossary: &'a [GlossaryTerm]) -> Self {
        let mut by_source: HashMap<&str, Vec<usize>> = HashMap::new();
        let mut by_target: HashMap<&str, Vec<usize>> = HashMap::new();
        for (i, unit) in units.iter().enumerate() {
            by_source.entry(unit.source.as_str()).or_default().push(i);
            by_target.entry(unit.target.as_str()).or_default().push(i);
        }
        Self {
            units,
            config,
            glossary,
            by_source,
            by_target,
        }
    }
}
