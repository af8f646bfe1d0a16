//! Shared `quick-xml` helpers for the XML-family decoders (xliff, sdlxliff,
//! the generic Android-style xml, resx, tmx). Factored out because all four
//! need the same "flatten mixed content to its text" behavior described in
//! `spec.md` §9.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::ParseError;

/// Reads and discards events until the matching end tag of the element
/// whose start tag was just consumed, concatenating every text/CDATA node
/// encountered along the way. Inline child tags (XLIFF `<bpt>`/`<g>`/`<x/>`,
/// stray markup inside an Android string) are dropped but their own text
/// content is kept, per the "flatten mixed content" rule.
pub fn read_flattened_text(
    reader: &mut Reader<&[u8]>,
    filename: &str,
) -> Result<String, ParseError> {
    let mut buf = Vec::new();
    let mut depth = 0u32;
    let mut text = String::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Ok(Event::Text(e)) => {
                let decoded = e
                    .unescape()
                    .map_err(|err| ParseError::new(filename, format!("invalid XML text: {err}")))?;
                text.push_str(&decoded);
            }
            Ok(Event::CData(e)) => {
                text.push_str(&String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::Eof) => {
                return Err(ParseError::new(filename, "unexpected end of file inside element"));
            }
            Ok(_) => {}
            Err(err) => return Err(ParseError::new(filename, format!("malformed XML: {err}"))),
        }
        buf.clear();
    }
    Ok(text)
}

/// Decodes an attribute value (entity references included), per `spec.md`
/// §9 "entity references inside attributes are decoded".
pub fn attr_value(
    attr: &quick_xml::events::attributes::Attribute,
    filename: &str,
) -> Result<String, ParseError> {
    attr.unescape_value()
        .map(|s| s.to_string())
        .map_err(|err| ParseError::new(filename, format!("invalid XML attribute: {err}")))
}
