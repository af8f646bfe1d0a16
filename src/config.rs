//! Analyzer configuration (C6). A `QAConfig` tunes which rules run and a
//! handful of rule parameters; it never changes parsing or the data model.
//! See `spec.md` §4.6.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::GlossaryTerm;
use crate::rules::RULE_TAGS;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QAConfig {
    /// Per-rule tag -> enabled. A tag absent from this map runs at its
    /// default (enabled, except the two inert rules which never fire
    /// regardless).
    pub rules: HashMap<String, bool>,
    pub max_length_ratio: f64,
    /// Reserved for future glob-style unit exclusion; unused by any rule
    /// today (`spec.md` §4.6).
    pub ignore_patterns: Vec<String>,
    /// Reserved for extending the placeholder families `inconsistent_placeholders`
    /// recognizes.
    pub custom_placeholders: Vec<String>,
    pub check_html_tags: bool,
    pub check_xml_tags: bool,
    pub check_placeholders: bool,
    pub case_sensitive: bool,
    pub glossary: Option<Vec<GlossaryTerm>>,
}

impl Default for QAConfig {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
            max_length_ratio: 1.5,
            ignore_patterns: Vec::new(),
            custom_placeholders: Vec::new(),
            check_html_tags: true,
            check_xml_tags: true,
            check_placeholders: true,
            case_sensitive: false,
            glossary: None,
        }
    }
}

impl QAConfig {
    /// Whether the rule named by `tag` should run. Rules not mentioned in
    /// `self.rules` default to enabled.
    pub fn is_enabled(&self, tag: &str) -> bool {
        *self.rules.get(tag).unwrap_or(&true)
    }

    /// Validates the config against `spec.md` §4.6's bounds, returning the
    /// first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1.0..=3.0).contains(&self.max_length_ratio) {
            return Err(ConfigError::LengthRatioOutOfRange(self.max_length_ratio));
        }
        for tag in self.rules.keys() {
            if !RULE_TAGS.contains(&tag.as_str()) {
                return Err(ConfigError::UnknownRule(tag.clone()));
            }
        }
        Ok(())
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
