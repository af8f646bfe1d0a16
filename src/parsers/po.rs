//! PO / POT bundle decoder: a line-oriented state machine over three
//! latches (`msgctxt`, `msgid`, `msgstr`), each accumulating quoted-string
//! continuation lines. See `spec.md` §4.2 "PO / POT".

use crate::error::ParseError;
use crate::model::{TranslationFile, TranslationUnit};
use crate::parsers::unescape_basic;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Target {
    None,
    Ctxt,
    Id,
    Str,
}

#[derive(Default)]
struct Pending {
    ctxt: Option<String>,
    id: Option<String>,
    msgstr: Option<String>,
    notes: Vec<String>,
    have_msgstr: bool,
}

impl Pending {
    fn is_empty(&self) -> bool {
        self.ctxt.is_none() && self.id.is_none() && !self.have_msgstr
    }
}

pub fn parse(bytes: &[u8], filename: &str, format: &str) -> Result<TranslationFile, ParseError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::new(filename, format!("invalid UTF-8: {e}")))?;

    let mut file = TranslationFile::new(filename, format, 0);
    let mut index = 1usize;
    let mut pending = Pending::default();
    let mut target = Target::None;

    for raw_line in text.lines() {
        let line = raw_line.trim_end_matches('\r');
        let trimmed = line.trim_start();

        if let Some(note) = trimmed.strip_prefix("#.") {
            pending.notes.push(note.trim().to_string());
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("msgctxt") {
            flush_if_complete(&mut pending, &mut file, &mut index);
            pending.ctxt = Some(unescape_basic(extract_quoted(rest), false));
            target = Target::Ctxt;
        } else if let Some(rest) = trimmed.strip_prefix("msgid_plural") {
            // Plural forms are not part of this model; consume without a
            // dedicated target so its continuation lines don't corrupt msgid.
            let _ = unescape_basic(extract_quoted(rest), false);
            target = Target::None;
        } else if let Some(rest) = trimmed.strip_prefix("msgid") {
            flush_if_complete(&mut pending, &mut file, &mut index);
            pending.id = Some(unescape_basic(extract_quoted(rest), false));
            target = Target::Id;
        } else if let Some(rest) = trimmed.strip_prefix("msgstr") {
            pending.msgstr = Some(unescape_basic(extract_quoted(rest), false));
            pending.have_msgstr = true;
            target = Target::Str;
        } else if trimmed.starts_with('"') {
            let decoded = unescape_basic(extract_quoted(trimmed), false);
            match target {
                Target::Ctxt => append(&mut pending.ctxt, &decoded),
                Target::Id => append(&mut pending.id, &decoded),
                Target::Str => append(&mut pending.msgstr, &decoded),
                Target::None => {}
            }
        }
        // blank lines and other comment kinds (#, #:, #,, #|) are ignored.
    }

    if pending.have_msgstr {
        emit(&mut pending, &mut file, &mut index);
    }

    Ok(file)
}

fn append(slot: &mut Option<String>, text: &str) {
    match slot {
        Some(existing) => existing.push_str(text),
        None => *slot = Some(text.to_string()),
    }
}

fn flush_if_complete(pending: &mut Pending, file: &mut TranslationFile, index: &mut usize) {
    if pending.have_msgstr {
        emit(pending, file, index);
    } else if !pending.is_empty() {
        *pending = Pending::default();
    }
}

fn emit(pending: &mut Pending, file: &mut TranslationFile, index: &mut usize) {
    let taken = std::mem::take(pending);
    let id = taken.id.unwrap_or_default();
    // The header entry (empty msgid) carries file metadata, not a
    // translatable segment; skip it to keep unit keys non-empty.
    if !id.is_empty() {
        let key = match &taken.ctxt {
            Some(ctxt) if !ctxt.is_empty() => format!("{ctxt}\u{4}{id}"),
            _ => id.clone(),
        };
        let mut unit = TranslationUnit::new(key, id, *index).with_target(taken.msgstr.unwrap_or_default());
        if !taken.notes.is_empty() {
            unit = unit.with_notes(taken.notes.join(" "));
        }
        file.units.push(unit);
        *index += 1;
    }
}

/// Extracts the content between the first and last `"` on a line.
fn extract_quoted(rest: &str) -> &str {
    let rest = rest.trim_start();
    let Some(start) = rest.find('"') else {
        return "";
    };
    let Some(end) = rest.rfind('"') else {
        return "";
    };
    if end <= start {
        return "";
    }
    &rest[start + 1..end]
}
