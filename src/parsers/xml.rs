//! Generic Android-style XML decoder (`<string>`/`<string-array>`). See
//! `spec.md` §4.2 "Generic XML (Android-style)".

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

    let mut file = TranslationFile::new(filename, "xml", 0);
    let mut index = 1usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"string" => {
                let name = required_name_attr(&e, filename, "string")?;
                let text = read_flattened_text(&mut reader, filename)?;
                file.units.push(TranslationUnit::new(name, text, index));
                index += 1;
            }
            Ok(Event::Start(e)) if e.name().as_ref() == b"string-array" => {
                let name = required_name_attr(&e, filename, "string-array")?;
                index = parse_string_array(&mut reader, filename, &name, &mut file.units, index)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(ParseError::new(filename, format!("malformed XML: {err}"))),
        }
        buf.clear();
    }

    Ok(file)
}

fn required_name_attr(
    e: &quick_xml::events::BytesStart,
    filename: &str,
    tag: &str,
) -> Result<String, ParseError> {
    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|err| ParseError::new(filename, err.to_string()))?;
        if attr.key.as_ref() == b"name" {
            return attr_value(&attr, filename);
        }
    }
    Err(ParseError::new(filename, format!("<{tag}> missing 'name' attribute")))
}

fn parse_string_array(
    reader: &mut Reader<&[u8]>,
    filename: &str,
    array_name: &str,
    units: &mut Vec<TranslationUnit>,
    mut index: usize,
) -> Result<usize, ParseError> {
    let mut item_index = 0usize;
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"item" => {
                let text = read_flattened_text(reader, filename)?;
                units.push(TranslationUnit::new(
                    format!("{array_name}[{item_index}]"),
                    text,
                    index,
                ));
                item_index += 1;
                index += 1;
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"string-array" => break,
            Ok(Event::Eof) => {
                return Err(ParseError::new(filename, "unexpected end of file in string-array"));
            }
            Ok(_) => {}
            Err(err) => return Err(ParseError::new(filename, format!("malformed XML: {err}"))),
        }
        buf.clear();
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_strings() {
        let xml = r#"<resources>
            <string name="app_name">My App</string>
            <string name="greeting">Hello <b>there</b></string>
        </resources>"#;
        let file = parse(xml.as_bytes(), "strings.xml").unwrap();
        assert_eq!(file.units.len(), 2);
        assert_eq!(file.units[0].key, "app_name");
        assert_eq!(file.units[0].source, "My App");
        assert_eq!(file.units[1].source, "Hello there");
        assert_eq!(file.units[1].target, "");
    }

    #[test]
    fn parses_string_arrays_with_zero_based_indices() {
        let xml = r#"<resources>
            <string-array name="days">
                <item>Mon</item>
                <item>Tue</item>
            </string-array>
        </resources>"#;
        let file = parse(xml.as_bytes(), "strings.xml").unwrap();
        assert_eq!(file.units.len(), 2);
        assert_eq!(file.units[0].key, "days[0]");
        assert_eq!(file.units[0].source, "Mon");
        assert_eq!(file.units[1].key, "days[1]");
        assert_eq!(file.units[1].source, "Tue");
    }

    #[test]
    fn requires_name_attribute() {
        let err = parse(br#"<resources><string>no name</string></resources>"#, "s.xml")
            .unwrap_err();
        assert!(err.message.contains("name"));
    }
}
