//! Glossary loader (C3): two-column term extraction from spreadsheet, TMX,
//! or CSV/TSV sources. See `spec.md` §4.3.

use calamine::{Reader as _, Xlsx};
use std::io::Cursor;

use crate::error::ParseError;
use crate::model::GlossaryTerm;
use crate::parsers::tmx;

/// Loads glossary terms from `bytes`, dispatching on `filename`'s
/// extension. Order is preserved but not semantically significant
/// (`spec.md` §4.3).
pub fn load(bytes: &[u8], filename: &str) -> Result<Vec<GlossaryTerm>, ParseError> {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "xlsx" | "xls" => load_spreadsheet(bytes, filename),
        "tmx" => load_tmx(bytes, filename),
        "csv" => load_tabular(bytes, filename, b','),
        "tsv" => load_tabular(bytes, filename, b'\t'),
        _ => Err(ParseError::unsupported_extension(filename)),
    }
}

fn is_header_row(cells: &[String]) -> bool {
    cells
        .iter()
        .any(|c| matches!(c.trim().to_lowercase().as_str(), "source" | "term"))
}

fn row_to_term(cells: &[String]) -> Option<GlossaryTerm> {
    let source = cells.first()?.trim();
    let target = cells.get(1)?.trim();
    if source.is_empty() || target.is_empty() {
        return None;
    }
    let context = cells
        .get(2)
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string);
    Some(GlossaryTerm {
        source: source.to_string(),
        target: target.to_string(),
        context,
    })
}

fn load_tabular(bytes: &[u8], filename: &str, delimiter: u8) -> Result<Vec<GlossaryTerm>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut terms = Vec::new();
    for (row_num, record) in reader.records().enumerate() {
        let record = record.map_err(|e| ParseError::new(filename, format!("malformed row: {e}")))?;
        let cells: Vec<String> = record.iter().map(str::to_string).collect();
        if row_num == 0 && is_header_row(&cells) {
            continue;
        }
        if let Some(term) = row_to_term(&cells) {
            terms.push(term);
        }
    }
    Ok(terms)
}

fn load_tmx(bytes: &[u8], filename: &str) -> Result<Vec<GlossaryTerm>, ParseError> {
    let file = tmx::parse(bytes, filename)?;
    Ok(file
        .units
        .into_iter()
        .filter(|u| !u.source.trim().is_empty() && !u.target.trim().is_empty())
        .map(|u| GlossaryTerm {
            source: u.source,
            target: u.target,
            context: u.context,
        })
        .collect())
}

fn load_spreadsheet(bytes: &[u8], filename: &str) -> Result<Vec<GlossaryTerm>, ParseError> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| ParseError::new(filename, format!("invalid spreadsheet: {e}")))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ParseError::new(filename, "spreadsheet has no worksheets"))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ParseError::new(filename, format!("cannot read worksheet: {e}")))?;

    let mut terms = Vec::new();
    for (row_num, row) in range.rows().enumerate() {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        if row_num == 0 && is_header_row(&cells) {
            continue;
        }
        if let Some(term) = row_to_term(&cells) {
            terms.push(term);
        }
    }
    Ok(terms)
}
