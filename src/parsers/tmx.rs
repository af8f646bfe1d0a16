//! TMX (Translation Memory eXchange) bundle decoder. See `spec.md` §4.2
//! "TMX" and §9's open question on the source-language heuristic.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::ParseError;
use crate::model::{TranslationFile, TranslationUnit};
use crate::parsers::xml_util::{attr_value, read_flattened_text};

pub fn parse(bytes: &[u8], filename: &str) -> Result<TranslationFile, ParseError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::new(filename, format!("invalid UTF-8: {e}")))?;

    let mut reader = Reader::from_reader(text.as_bytes());
    reader.config_mut().trim_text(true);

    let mut file = TranslationFile::new(filename, "tmx", 0);
    let mut index = 1usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"tu" => {
                let mut id = None;
                for attr in e.attributes().with_checks(false) {
                    let attr = attr.map_err(|err| ParseError::new(filename, err.to_string()))?;
                    if attr.key.as_ref() == b"id" {
                        id = Some(attr_value(&attr, filename)?);
                    }
                }
                let key = id.unwrap_or_else(|| format!("tu_{index}"));
                let unit = parse_tu(&mut reader, filename, key, index)?;
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

fn parse_tu(
    reader: &mut Reader<&[u8]>,
    filename: &str,
    key: String,
    index: usize,
) -> Result<TranslationUnit, ParseError> {
    let mut tuvs: Vec<(String, String)> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"tuv" => {
                let mut lang = String::new();
                for attr in e.attributes().with_checks(false) {
                    let attr = attr.map_err(|err| ParseError::new(filename, err.to_string()))?;
                    if attr.key.as_ref() == b"xml:lang" {
                        lang = attr_value(&attr, filename)?;
                    }
                }
                let seg_text = parse_tuv_body(reader, filename)?;
                tuvs.push((lang, seg_text));
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"tu" => break,
            Ok(Event::Eof) => {
                return Err(ParseError::new(filename, "unexpected end of file in <tu>"));
            }
            Ok(_) => {}
            Err(err) => return Err(ParseError::new(filename, format!("malformed XML: {err}"))),
        }
        buf.clear();
    }

    let source_idx = tuvs
        .iter()
        .position(|(lang, _)| lang.to_lowercase().starts_with("en"))
        .unwrap_or(0);
    let source = tuvs.get(source_idx).map(|(_, t)| t.clone()).unwrap_or_default();
    let target = tuvs
        .iter()
        .enumerate()
        .find(|(i, _)| *i != source_idx)
        .map(|(_, (_, t))| t.clone())
        .unwrap_or_default();

    Ok(TranslationUnit::new(key, source, index).with_target(target))
}

/// Reads the body of a `<tuv>` looking for its `<seg>` text, skipping any
/// other children (e.g. `<prop>`, `<note>`) until the matching `</tuv>`.
fn parse_tuv_body(reader: &mut Reader<&[u8]>, filename: &str) -> Result<String, ParseError> {
    let mut seg = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let tag = e.name().as_ref().to_vec();
                let text = read_flattened_text(reader, filename)?;
                if tag == b"seg" {
                    seg = text;
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"tuv" => break,
            Ok(Event::Eof) => {
                return Err(ParseError::new(filename, "unexpected end of file in <tuv>"));
            }
            Ok(_) => {}
            Err(err) => return Err(ParseError::new(filename, format!("malformed XML: {err}"))),
        }
        buf.clear();
    }

    Ok(seg)
}
