//! iOS `.strings` bundle decoder. Each line matching
//! `"<key>" = "<value>";` becomes one unit; other lines (comments, blanks)
//! are skipped without error. See `spec.md` §4.2 "iOS .strings".

use regex::Regex;
use std::sync::OnceLock;

use crate::error::ParseError;
use crate::model::{TranslationFile, TranslationUnit};

fn line_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^\s*"((?:[^"\\]|\\.)*)"\s*=\s*"((?:[^"\\]|\\.)*)"\s*;\s*$"#).unwrap()
    })
}

pub fn parse(bytes: &[u8], filename: &str) -> Result<TranslationFile, ParseError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::new(filename, format!("invalid UTF-8: {e}")))?;

    let mut file = TranslationFile::new(filename, "strings", 0);
    let mut index = 1usize;

    for line in text.lines() {
        let Some(caps) = line_pattern().captures(line) else {
            continue;
        };
        let key = unescape(&caps[1]);
        let value = unescape(&caps[2]);
        let unit = TranslationUnit::new(key.clone(), key, index).with_target(value);
        file.units.push(unit);
        index += 1;
    }

    Ok(file)
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some(other) => out.push(other),
                None => {}
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_lines() {
        let content = r#"
/* comment */
"save_button" = "Save";
"cancel_button" = "Cancel";
"#;
        let file = parse(content.as_bytes(), "Localizable.strings").unwrap();
        assert_eq!(file.units.len(), 2);
        assert_eq!(file.units[0].key, "save_button");
        assert_eq!(file.units[0].source, "save_button");
        assert_eq!(file.units[0].target, "Save");
    }

    #[test]
    fn skips_comments_and_blank_lines_without_error() {
        let content = "// header\n\n\"a\" = \"b\";\n";
        let file = parse(content.as_bytes(), "L.strings").unwrap();
        assert_eq!(file.units.len(), 1);
    }

    #[test]
    fn ignores_multiline_style_entries() {
        // Single-line only, per spec; a split entry is simply skipped.
        let content = "\"a\"\n= \"b\";\n";
        let file = parse(content.as_bytes(), "L.strings").unwrap();
        assert!(file.units.is_empty());
    }
}
