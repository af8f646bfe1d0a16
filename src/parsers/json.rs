//! JSON bundle decoder. Depth-first traversal of a nested string/object
//! mapping, producing one unit per string leaf with a dot-joined key path.
//! Arrays are ignored. See `spec.md` §4.2 "JSON".

use serde_json::Value;

use crate::error::ParseError;
use crate::model::{TranslationFile, TranslationUnit};

const WRAPPER_KEYS: [&str; 3] = ["translations", "messages", "strings"];

pub fn parse(bytes: &[u8], filename: &str) -> Result<TranslationFile, ParseError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::new(filename, format!("invalid UTF-8: {e}")))?;
    let value: Value = serde_json::from_str(text)
        .map_err(|e| ParseError::new(filename, format!("invalid JSON: {e}")))?;

    let root = unwrap_root(&value);

    let mut file = TranslationFile::new(filename, "json", 0);
    let mut index = 1usize;
    flatten(root, String::new(), &mut file.units, &mut index);
    Ok(file)
}

fn unwrap_root(value: &Value) -> &Value {
    if let Value::Object(map) = value {
        for key in WRAPPER_KEYS {
            if let Some(inner) = map.get(key) {
                return inner;
            }
        }
    }
    value
}

fn flatten(value: &Value, prefix: String, units: &mut Vec<TranslationUnit>, index: &mut usize) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(val, new_prefix, units, index);
            }
        }
        Value::String(s) => {
            if !prefix.is_empty() {
                units.push(TranslationUnit::new(prefix, s.clone(), *index));
                *index += 1;
            }
        }
        _ => {}
    }
}
