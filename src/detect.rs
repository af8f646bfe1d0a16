//! Format detector (C1): maps a filename to a bundle format tag using only
//! the lowercased final extension. See `spec.md` §4.1.

/// Recognized bundle formats. The `Display` impl yields the lowercase tag
/// used throughout `TranslationFile::format` and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Xliff,
    Sdlxliff,
    Xml,
    Po,
    Pot,
    Strings,
    Yaml,
    Properties,
    Resx,
    Csv,
    Tsv,
    Tmx,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Format::Json => "json",
            Format::Xliff => "xliff",
            Format::Sdlxliff => "sdlxliff",
            Format::Xml => "xml",
            Format::Po => "po",
            Format::Pot => "pot",
            Format::Strings => "strings",
            Format::Yaml => "yaml",
            Format::Properties => "properties",
            Format::Resx => "resx",
            Format::Csv => "csv",
            Format::Tsv => "tsv",
            Format::Tmx => "tmx",
        };
        write!(f, "{tag}")
    }
}

/// Detects the bundle format from a filename's final extension. Returns
/// `None` for anything unrecognized; the caller surfaces that as a
/// `ParseError`.
pub fn detect(filename: &str) -> Option<Format> {
    let ext = filename.rsplit('.').next()?.to_lowercase();
    match ext.as_str() {
        "json" => Some(Format::Json),
        "xliff" | "xlf" => Some(Format::Xliff),
        "sdlxliff" => Some(Format::Sdlxliff),
        "xml" => Some(Format::Xml),
        "po" => Some(Format::Po),
        "pot" => Some(Format::Pot),
        "strings" => Some(Format::Strings),
        "yaml" | "yml" => Some(Format::Yaml),
        "properties" => Some(Format::Properties),
        "resx" => Some(Format::Resx),
        "csv" => Some(Format::Csv),
        "tsv" => Some(Format::Tsv),
        "tmx" => Some(Format::Tmx),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_every_extension() {
        assert_eq!(detect("a.json"), Some(Format::Json));
        assert_eq!(detect("a.xliff"), Some(Format::Xliff));
        assert_eq!(detect("a.xlf"), Some(Format::Xliff));
        assert_eq!(detect("a.sdlxliff"), Some(Format::Sdlxliff));
        assert_eq!(detect("a.xml"), Some(Format::Xml));
        assert_eq!(detect("a.po"), Some(Format::Po));
        assert_eq!(detect("a.pot"), Some(Format::Pot));
        assert_eq!(detect("a.strings"), Some(Format::Strings));
        assert_eq!(detect("a.yaml"), Some(Format::Yaml));
        assert_eq!(detect("a.yml"), Some(Format::Yaml));
        assert_eq!(detect("a.properties"), Some(Format::Properties));
        assert_eq!(detect("a.resx"), Some(Format::Resx));
        assert_eq!(detect("a.csv"), Some(Format::Csv));
        assert_eq!(detect("a.tsv"), Some(Format::Tsv));
        assert_eq!(detect("a.tmx"), Some(Format::Tmx));
    }

    #[test]
    fn is_case_insensitive_on_extension_only() {
        assert_eq!(detect("Messages.JSON"), Some(Format::Json));
        assert_eq!(detect("Messages.Json"), Some(Format::Json));
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert_eq!(detect("readme.md"), None);
        assert_eq!(detect("noext"), None);
        assert_eq!(detect(""), None);
    }
}
