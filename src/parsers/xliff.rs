//! XLIFF / SDLXLIFF bundle decoder. See `spec.md` §4.2 "XLIFF / SDLXLIFF".
//!
//! The two formats share a `<trans-unit>`-based structure; SDLXLIFF is
//! XLIFF 1.2 plus SDL Studio extensions we don't care about, so one decoder
//! covers both (the `sdl` flag only changes the recorded format tag).

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::ParseError;
use crate::model::{TranslationFile, TranslationUnit};
use crate::parsers::xml_util::{attr_value, read_flattened_text};

pub fn parse(bytes: &[u8], filename: &str, sdl: bool) -> Result<TranslationFile, ParseError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::new(filename, format!("invalid UTF-8: {e}")))?;

    let mut reader = Reader::from_reader(text.as_bytes());
    reader.config_mut().trim_text(true);

    let format_tag = if sdl { "sdlxliff" } else { "xliff" };
    let mut file = TranslationFile::new(filename, format_tag, 0);
    let mut seen_file_element = false;
    let mut index = 1usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"file" => {
                if !seen_file_element {
                    for attr in e.attributes().with_checks(false) {
                        let attr =
                            attr.map_err(|err| ParseError::new(filename, err.to_string()))?;
                        match attr.key.as_ref() {
                            b"source-language" => {
                                file.source_language = attr_value(&attr, filename)?;
                            }
                            b"target-language" => {
                                file.target_language = attr_value(&attr, filename)?;
                            }
                            _ => {}
                        }
                    }
                    seen_file_element = true;
                }
            }
            Ok(Event::Start(e)) if e.name().as_ref() == b"trans-unit" => {
                let mut id = None;
                for attr in e.attributes().with_checks(false) {
                    let attr = attr.map_err(|err| ParseError::new(filename, err.to_string()))?;
                    if attr.key.as_ref() == b"id" {
                        id = Some(attr_value(&attr, filename)?);
                    }
                }
                let key = id.unwrap_or_else(|| format!("unit_{index}"));
                let unit = parse_trans_unit(&mut reader, filename, key, index)?;
                file.units.push(unit);
                index += 1;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(ParseError::new(filename, format!("malformed XML: {err}"))),
        }
        buf.clear();
    }

    Ok(file)
}

fn parse_trans_unit(
    reader: &mut Reader<&[u8]>,
    filename: &str,
    key: String,
    index: usize,
) -> Result<TranslationUnit, ParseError> {
    let mut source = String::new();
    let mut target = String::new();
    let mut notes: Option<String> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.name().as_ref().to_vec();
                let text = read_flattened_text(reader, filename)?;
                match name.as_slice() {
                    b"source" => source = text,
                    b"target" => target = text,
                    b"note" if notes.is_none() => notes = Some(text),
                    _ => {}
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"trans-unit" => break,
            Ok(Event::Eof) => {
                return Err(ParseError::new(filename, "unexpected end of file in trans-unit"));
            }
            Ok(_) => {}
            Err(err) => return Err(ParseError::new(filename, format!("malformed XML: {err}"))),
        }
        buf.clear();
    }

    let mut unit = TranslationUnit::new(key, source, index).with_target(target);
    if let Some(notes) = notes {
        unit = unit.with_notes(notes);
    }
    Ok(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0"?>
<xliff version="1.2">
  <file source-language="en" target-language="fr">
    <body>
      <trans-unit id="greeting">
        <source>Hello <g id="1">world</g>!</source>
        <target>Bonjour <g id="1">monde</g>!</target>
        <note>friendly greeting</note>
      </trans-unit>
      <trans-unit id="empty">
        <source>Untranslated</source>
        <target></target>
      </trans-unit>
    </body>
  </file>
</xliff>"#;

    #[test]
    fn extracts_languages_from_first_file_element() {
        let file = parse(SAMPLE.as_bytes(), "a.xliff", false).unwrap();
        assert_eq!(file.source_language, "en");
        assert_eq!(file.target_language, "fr");
    }

    #[test]
    fn flattens_inline_markup_and_reads_notes() {
        let file = parse(SAMPLE.as_bytes(), "a.xliff", false).unwrap();
        assert_eq!(file.units[0].key, "greeting");
        assert_eq!(file.units[0].source, "Hello world!");
        assert_eq!(file.units[0].target, "Bonjour monde!");
        assert_eq!(file.units[0].notes.as_deref(), Some("friendly greeting"));
    }

    #[test]
    fn empty_target_becomes_empty_string() {
        let file = parse(SAMPLE.as_bytes(), "a.xliff", false).unwrap();
        assert_eq!(file.units[1].target, "");
    }

    #[test]
    fn sdlxliff_uses_its_own_format_tag() {
        let file = parse(SAMPLE.as_bytes(), "a.sdlxliff", true).unwrap();
        assert_eq!(file.format, "sdlxliff");
    }

    #[test]
    fn rejects_malformed_xml() {
        let broken = br#"<xliff><file><body><trans-unit id="a"><source>Hi</bogus></trans-unit></body></file></xliff>"#;
        let err = parse(broken, "broken.xliff", false).unwrap_err();
        assert_eq!(err.filename, "broken.xliff");
    }
}
