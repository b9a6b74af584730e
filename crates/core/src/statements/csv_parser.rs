//! Low-level decoding of uploaded statement sheets.
//!
//! Payroll statements arrive as CSV exports with inconsistent delimiters
//! and the occasional BOM. This module turns raw bytes into a header row
//! plus string-valued data rows; header aliasing and typing happen later
//! in the normalize stage.

use csv::{ReaderBuilder, Terminator};

use super::statements_errors::StatementError;

/// A decoded statement sheet: trimmed headers and rows padded or
/// truncated to the header width.
#[derive(Debug, Clone)]
pub struct ParsedSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Decodes raw statement bytes into headers and data rows.
///
/// The first non-empty row is the header row. Rows consisting only of
/// blank cells are dropped. A sheet that decodes to a header but no data
/// rows is returned as-is; deciding that zero rows is an error belongs to
/// the pipeline, which distinguishes "file had nothing" from "file had
/// rows but all were filtered".
pub fn parse_statement_sheet(content: &[u8]) -> Result<ParsedSheet, StatementError> {
    let text = decode_content(content)?;
    let delimiter = detect_delimiter(&text);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false) // headers handled manually
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(text.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => records.push(record.iter().map(|s| s.to_string()).collect()),
            Err(e) => {
                // A record-level error this early means the bytes are not
                // a statement sheet (binary upload, wrong format).
                return Err(StatementError::SourceUnreadable(e.to_string()));
            }
        }
    }

    // Drop blank rows before picking the header.
    records.retain(|row| !row.iter().all(|cell| cell.trim().is_empty()));

    let mut rows = records.into_iter();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(|h| h.trim().to_string()).collect(),
        None => {
            return Ok(ParsedSheet {
                headers: Vec::new(),
                rows: Vec::new(),
            })
        }
    };

    // Pad short rows and truncate long ones to the header width so the
    // normalize stage can index columns positionally.
    let width = headers.len();
    let rows = rows
        .map(|mut row| {
            if row.len() < width {
                row.resize(width, String::new());
            } else if row.len() > width {
                row.truncate(width);
            }
            row
        })
        .collect();

    Ok(ParsedSheet { headers, rows })
}

/// Decodes content bytes to UTF-8, handling a BOM if present.
///
/// Statement exports are UTF-8; anything else (an `.xlsx` uploaded by
/// mistake, a truncated download) fails decoding and is reported as an
/// unreadable source.
fn decode_content(content: &[u8]) -> Result<String, StatementError> {
    let content = content.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(content);

    match std::str::from_utf8(content) {
        Ok(s) => Ok(s.to_string()),
        Err(e) => Err(StatementError::SourceUnreadable(format!(
            "invalid UTF-8 at byte {}",
            e.valid_up_to()
        ))),
    }
}

/// Auto-detects the delimiter by scoring common candidates over the
/// first few lines: occurrences weighted by cross-line consistency.
fn detect_delimiter(content: &str) -> u8 {
    let candidates = [b',', b';', b'\t'];
    let mut best = b',';
    let mut best_score = 0usize;

    for delim in candidates {
        let score = score_delimiter(content, delim as char);
        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}

fn score_delimiter(content: &str, delimiter: char) -> usize {
    let counts: Vec<usize> = content
        .lines()
        .take(10)
        .map(|line| line.matches(delimiter).count())
        .collect();

    let Some(&first_count) = counts.first() else {
        return 0;
    };
    if first_count == 0 {
        return 0;
    }

    let consistent = counts.iter().filter(|&&c| c == first_count).count();
    first_count * consistent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_sheet() {
        let content = b"Agent,first_name,last_name,Advance\nA100,Jane,Doe,250\nA101,John,Roe,0";
        let sheet = parse_statement_sheet(content).unwrap();

        assert_eq!(sheet.headers, vec!["Agent", "first_name", "last_name", "Advance"]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0], vec!["A100", "Jane", "Doe", "250"]);
    }

    #[test]
    fn test_semicolon_delimiter_detected() {
        let content = b"Agent;Advance\nA100;250\nA101;0";
        let sheet = parse_statement_sheet(content).unwrap();

        assert_eq!(sheet.headers, vec!["Agent", "Advance"]);
        assert_eq!(sheet.rows[0], vec!["A100", "250"]);
    }

    #[test]
    fn test_tab_delimiter_detected() {
        let content = b"Agent\tAdvance\nA100\t250";
        let sheet = parse_statement_sheet(content).unwrap();

        assert_eq!(sheet.headers, vec!["Agent", "Advance"]);
    }

    #[test]
    fn test_bom_is_stripped() {
        let content = b"\xEF\xBB\xBFAgent,Advance\nA100,250";
        let sheet = parse_statement_sheet(content).unwrap();

        assert_eq!(sheet.headers[0], "Agent");
    }

    #[test]
    fn test_blank_rows_dropped() {
        let content = b"Agent,Advance\nA100,250\n,\n\nA101,0";
        let sheet = parse_statement_sheet(content).unwrap();

        assert_eq!(sheet.rows.len(), 2);
    }

    #[test]
    fn test_rows_padded_and_truncated_to_header_width() {
        let content = b"Agent,first_name,last_name\nA100,Jane\nA101,John,Roe,extra";
        let sheet = parse_statement_sheet(content).unwrap();

        assert_eq!(sheet.rows[0], vec!["A100", "Jane", ""]);
        assert_eq!(sheet.rows[1], vec!["A101", "John", "Roe"]);
    }

    #[test]
    fn test_empty_source_yields_no_rows() {
        let sheet = parse_statement_sheet(b"").unwrap();
        assert!(sheet.headers.is_empty());
        assert!(sheet.rows.is_empty());
    }

    #[test]
    fn test_header_only_sheet_yields_no_rows() {
        let sheet = parse_statement_sheet(b"Agent,Advance\n").unwrap();
        assert_eq!(sheet.headers.len(), 2);
        assert!(sheet.rows.is_empty());
    }

    #[test]
    fn test_binary_content_is_unreadable() {
        // First bytes of a ZIP container, what an .xlsx upload looks like
        let content = b"PK\x03\x04\x14\x00\x00\x00\x08\x00\xff\xfe";
        let err = parse_statement_sheet(content).unwrap_err();
        assert!(matches!(err, StatementError::SourceUnreadable(_)));
    }

    #[test]
    fn test_quoted_fields() {
        let content = b"Agent,Reason\nA100,\"chargeback, pending\"";
        let sheet = parse_statement_sheet(content).unwrap();

        assert_eq!(sheet.rows[0][1], "chargeback, pending");
    }
}
