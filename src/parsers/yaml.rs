//! Restricted YAML bundle decoder: scalar string leaves in nested mappings
//! only, assuming two-space indentation. Flow syntax, anchors, multi-line
//! scalars, and lists are explicitly unsupported. See `spec.md` §4.2 "YAML
//! (restricted)" and §9's open question on indentation.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::ParseError;
use crate::model::{TranslationFile, TranslationUnit};

fn line_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\s*)(\w[\w-]*):\s*(.*)$").unwrap())
}

pub fn parse(bytes: &[u8], filename: &str) -> Result<TranslationFile, ParseError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::new(filename, format!("invalid UTF-8: {e}")))?;

    let mut file = TranslationFile::new(filename, "yaml", 0);
    let mut index = 1usize;
    let mut stack: Vec<String> = Vec::new();

    for line in text.lines() {
        let Some(caps) = line_pattern().captures(line) else {
            continue;
        };
        let indent = caps[1].len();
        let key = caps[2].to_string();
        let value = caps[3].trim();
        let depth = indent / 2;

        stack.truncate(depth.min(stack.len()));

        if value.is_empty() {
            stack.push(key);
        } else {
            let path = if stack.is_empty() {
                key
            } else {
                format!("{}.{}", stack.join("."), key)
            };
            file.units.push(TranslationUnit::new(path, value, index));
            index += 1;
        }
    }

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_space_indented_nested_scalars() {
        let yaml = "common:\n  save: Save\n  cancel: Cancel\nauth:\n  login:\n    title: Login\n";
        let file = parse(yaml.as_bytes(), "en.yaml").unwrap();
        assert_eq!(file.units.len(), 3);
        assert_eq!(file.units[0].key, "common.save");
        assert_eq!(file.units[0].source, "Save");
        assert_eq!(file.units[2].key, "auth.login.title");
        assert_eq!(file.units[2].source, "Login");
    }

    #[test]
    fn sibling_keys_reset_stack_depth() {
        let yaml = "a:\n  b: one\nc:\n  d: two\n";
        let file = parse(yaml.as_bytes(), "en.yaml").unwrap();
        assert_eq!(file.units[0].key, "a.b");
        assert_eq!(file.units[1].key, "c.d");
    }

    #[test]
    fn root_level_scalars_have_bare_keys() {
        let yaml = "title: Hello\n";
        let file = parse(yaml.as_bytes(), "en.yaml").unwrap();
        assert_eq!(file.units[0].key, "title");
    }
}
