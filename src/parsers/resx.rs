//! .NET RESX bundle decoder. See `spec.md` §4.2 "RESX".

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

    let mut file = TranslationFile::new(filename, "resx", 0);
    let mut index = 1usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"data" => {
                let mut name = None;
                for attr in e.attributes().with_checks(false) {
                    let attr = attr.map_err(|err| ParseError::new(filename, err.to_string()))?;
                    if attr.key.as_ref() == b"name" {
                        name = Some(attr_value(&attr, filename)?);
                    }
                }
                let name =
                    name.ok_or_else(|| ParseError::new(filename, "<data> missing 'name' attribute"))?;
                let unit = parse_data(&mut reader, filename, name, index)?;
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

fn parse_data(
    reader: &mut Reader<&[u8]>,
    filename: &str,
    name: String,
    index: usize,
) -> Result<TranslationUnit, ParseError> {
    let mut value = String::new();
    let mut comment: Option<String> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let tag = e.name().as_ref().to_vec();
                let text = read_flattened_text(reader, filename)?;
                match tag.as_slice() {
                    b"value" => value = text,
                    b"comment" => comment = Some(text),
                    _ => {}
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"data" => break,
            Ok(Event::Eof) => {
                return Err(ParseError::new(filename, "unexpected end of file in <data>"));
            }
            Ok(_) => {}
            Err(err) => return Err(ParseError::new(filename, format!("malformed XML: {err}"))),
        }
        buf.clear();
    }

    let mut unit = TranslationUnit::new(name, value, index);
    if let Some(comment) = comment {
        unit = unit.with_notes(comment);
    }
    Ok(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<root>
  <data name="greeting">
    <value>Hello</value>
    <comment>shown on home page</comment>
  </data>
  <data name="farewell">
    <value>Bye</value>
  </data>
</root>"#;

    #[test]
    fn parses_data_elements() {
        let file = parse(SAMPLE.as_bytes(), "strings.resx").unwrap();
        assert_eq!(file.units.len(), 2);
        assert_eq!(file.units[0].key, "greeting");
        assert_eq!(file.units[0].source, "Hello");
        assert_eq!(file.units[0].notes.as_deref(), Some("shown on home page"));
        assert_eq!(file.units[1].notes, None);
        assert_eq!(file.units[1].target, "");
    }

    #[test]
    fn requires_name_attribute() {
        let err = parse(br#"<root><data><value>x</value></data></root>"#, "s.resx").unwrap_err();
        assert!(err.message.contains("name"));
    }
}
