//! Bundle parsers (C2): twelve format-specific decoders producing a
//! normalized `TranslationFile`. See `spec.md` §4.2.

pub mod csv_tabular;
pub mod json;
pub mod po;
pub mod properties;
pub mod resx;
pub mod strings;
pub mod tmx;
mod xml_util;
pub mod xliff;
pub mod xml;
pub mod yaml;

use crate::detect::{Format, detect};
use crate::error::ParseError;
use crate::model::TranslationFile;

/// Reads the entire byte content and decodes it into a `TranslationFile`
/// according to the format implied by `filename`'s extension. No streaming,
/// no partial results on failure (`spec.md` §4.2).
pub fn parse(bytes: &[u8], filename: &str) -> Result<TranslationFile, ParseError> {
    let format = detect(filename).ok_or_else(|| ParseError::unsupported_extension(filename))?;

    let mut file = match format {
        Format::Json => json::parse(bytes, filename)?,
        Format::Xliff => xliff::parse(bytes, filename, false)?,
        Format::Sdlxliff => xliff::parse(bytes, filename, true)?,
        Format::Xml => xml::parse(bytes, filename)?,
        Format::Po => po::parse(bytes, filename, "po")?,
        Format::Pot => po::parse(bytes, filename, "pot")?,
        Format::Strings => strings::parse(bytes, filename)?,
        Format::Yaml => yaml::parse(bytes, filename)?,
        Format::Properties => properties::parse(bytes, filename)?,
        Format::Resx => resx::parse(bytes, filename)?,
        Format::Csv => csv_tabular::parse(bytes, filename, b',')?,
        Format::Tsv => csv_tabular::parse(bytes, filename, b'\t')?,
        Format::Tmx => tmx::parse(bytes, filename)?,
    };
    file.byte_size = bytes.len() as u64;
    Ok(file)
}

/// Decodes escape sequences shared by PO and `.properties` string literals:
/// `\n`, `\t` (properties only), `\"`, `\\`.
pub(crate) fn unescape_basic(s: &str, tab: bool) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n') => {
                    out.push('\n');
                    chars.next();
                }
                Some('t') if tab => {
                    out.push('\t');
                    chars.next();
                }
                Some('"') => {
                    out.push('"');
                    chars.next();
                }
                Some('\\') => {
                    out.push('\\');
                    chars.next();
                }
                _ => out.push(c),
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
    fn dispatches_by_extension() {
        let result = parse(br#"{"a":"b"}"#, "messages.json");
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = parse(b"whatever", "notes.txt").unwrap_err();
        assert_eq!(err.filename, "notes.txt");
    }
}
