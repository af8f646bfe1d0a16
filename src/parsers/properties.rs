//! Java `.properties` bundle decoder. See `spec.md` §4.2 "Java .properties".

use crate::error::ParseError;
use crate::model::{TranslationFile, TranslationUnit};
use crate::parsers::unescape_basic;

pub fn parse(bytes: &[u8], filename: &str) -> Result<TranslationFile, ParseError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::new(filename, format!("invalid UTF-8: {e}")))?;

    let mut file = TranslationFile::new(filename, "properties", 0);
    let mut index = 1usize;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }
        let Some(eq) = trimmed.find('=') else {
            continue;
        };
        let key = trimmed[..eq].trim();
        let value = trimmed[eq + 1..].trim();
        if key.is_empty() {
            continue;
        }
        file.units
            .push(TranslationUnit::new(key, unescape_basic(value, true), index));
        index += 1;
    }

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_lines() {
        let content = "# comment\n! also a comment\n\nsave=Save\ncancel = Cancel\n";
        let file = parse(content.as_bytes(), "m.properties").unwrap();
        assert_eq!(file.units.len(), 2);
        assert_eq!(file.units[0].key, "save");
        assert_eq!(file.units[0].source, "Save");
        assert_eq!(file.units[1].key, "cancel");
        assert_eq!(file.units[1].source, "Cancel");
    }

    #[test]
    fn decodes_escape_sequences_in_value() {
        let content = r"greeting=Hello\nWorld\tTab";
        let file = parse(content.as_bytes(), "m.properties").unwrap();
        assert_eq!(file.units[0].source, "Hello\nWorld\tTab");
    }

    #[test]
    fn splits_on_first_equals_only() {
        let content = "eq=a=b=c";
        let file = parse(content.as_bytes(), "m.properties").unwrap();
        assert_eq!(file.units[0].source, "a=b=c");
    }
}
