//! CSV / TSV bundle decoder (RFC-4180 quoting via the `csv` crate). See
//! `spec.md` §4.2 "CSV / TSV".

use crate::error::ParseError;
use crate::model::{TranslationFile, TranslationUnit};

pub fn parse(bytes: &[u8], filename: &str, delimiter: u8) -> Result<TranslationFile, ParseError> {
    let format = if delimiter == b',' { "csv" } else { "tsv" };
    let mut file = TranslationFile::new(filename, format, 0);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut index = 1usize;
    for (row_num, record) in reader.records().enumerate() {
        let record = record.map_err(|e| ParseError::new(filename, format!("malformed row: {e}")))?;

        if row_num == 0 && looks_like_header(&record) {
            continue;
        }
        if record.len() < 2 {
            continue;
        }

        let key = record.get(0).unwrap_or_default().to_string();
        let source = record.get(1).unwrap_or_default().to_string();
        let target = record.get(2).unwrap_or_default().to_string();
        if key.is_empty() {
            continue;
        }

        file.units
            .push(TranslationUnit::new(key, source, index).with_target(target));
        index += 1;
    }

    Ok(file)
}

fn looks_like_header(record: &csv::StringRecord) -> bool {
    record
        .iter()
        .any(|field| matches!(field.trim().to_lowercase().as_str(), "key" | "source"))
}
