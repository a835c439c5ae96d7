//! GEDCOM line scanning
//!
//! A GEDCOM source is a sequence of lines of the form
//!
//! ```text
//! LEVEL [@XREF@] TAG [VALUE-TO-EOL]
//! ```
//!
//! where `LEVEL` is a non-negative integer, the xref id is an `@`-delimited
//! token that names the record, `TAG` is an alphanumeric tag, and the value
//! is the verbatim rest of the line (it may contain spaces and braces).
//!
//! This stage only recognizes the line shape. Nesting by level and the
//! `CONC`/`CONT` continuation folding happen in [records](crate::records).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::GedcomError;

static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s+(?:(@[^@\s]+@)\s+)?([A-Za-z0-9_]+)(?: (.*))?$").unwrap()
});

/// One structurally valid GEDCOM line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the source, for error reporting
    pub number: usize,
    pub level: u32,
    pub xref: Option<String>,
    pub tag: String,
    pub value: Option<String>,
}

/// Scan a GEDCOM source into lines
///
/// Blank lines are skipped. Trailing carriage returns are stripped so both
/// LF and CRLF sources scan identically. Any non-blank line that does not
/// match the grammar is a hard error carrying its 1-based line number.
pub fn scan_lines(source: &str) -> Result<Vec<SourceLine>, GedcomError> {
    let mut lines = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let number = index + 1;
        let trimmed = raw.trim_end_matches('\r');
        if trimmed.trim().is_empty() {
            continue;
        }
        let captures = LINE_RE
            .captures(trimmed.trim_start())
            .ok_or_else(|| GedcomError::MalformedLine {
                line: number,
                content: trimmed.to_string(),
            })?;
        let level: u32 = captures[1]
            .parse()
            .map_err(|_| GedcomError::MalformedLine {
                line: number,
                content: trimmed.to_string(),
            })?;
        lines.push(SourceLine {
            number,
            level,
            xref: captures.get(2).map(|m| m.as_str().to_string()),
            tag: captures[3].to_string(),
            value: captures.get(4).map(|m| m.as_str().to_string()),
        });
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_tag_line() {
        let lines = scan_lines("0 HEAD\n").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, 0);
        assert_eq!(lines[0].xref, None);
        assert_eq!(lines[0].tag, "HEAD");
        assert_eq!(lines[0].value, None);
    }

    #[test]
    fn test_xref_line() {
        let lines = scan_lines("0 @I0001@ INDI\n").unwrap();
        assert_eq!(lines[0].xref.as_deref(), Some("@I0001@"));
        assert_eq!(lines[0].tag, "INDI");
    }

    #[test]
    fn test_value_is_verbatim_rest_of_line() {
        let lines = scan_lines("2 PLAC Some Place, With {braces} and  spaces\n").unwrap();
        assert_eq!(
            lines[0].value.as_deref(),
            Some("Some Place, With {braces} and  spaces")
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let lines = scan_lines("0 HEAD\n\n   \n1 SOUR gtr\n").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].number, 4);
    }

    #[test]
    fn test_crlf_source() {
        let lines = scan_lines("0 HEAD\r\n1 CHAR UTF-8\r\n").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].value.as_deref(), Some("UTF-8"));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let err = scan_lines("0 HEAD\nnot a gedcom line\n").unwrap_err();
        match err {
            GedcomError::MalformedLine { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "not a gedcom line");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_value_after_tag_space() {
        // "1 CONT " carries an empty-string value, distinct from no value
        let lines = scan_lines("1 CONT \n").unwrap();
        assert_eq!(lines[0].value.as_deref(), Some(""));
    }
}
