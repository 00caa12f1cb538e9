//! Character-level parsing and writing of comma-delimited text.
//!
//! Quoting follows RFC-4180-style rules: a `"` toggles the quoted state, a
//! doubled `""` inside a quoted field is a literal quote, and commas inside
//! quotes do not split fields. Parsing is deliberately self-contained so the
//! same code path serves manual imports and the bootstrap seed.

use crate::model::BookRecord;

/// Header row written on export and accepted (among aliases) on import.
pub const EXPORT_HEADER: &str = "Book Title,Price/Unit,USD";

/// Splits raw delimited text into rows of raw string fields.
///
/// Handles both LF and CRLF line endings. Lines that are empty after
/// trimming are discarded; every surviving line yields at least one field.
/// Fields are not trimmed beyond what quote removal implies.
pub fn parse_delimited_text(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                // A doubled quote inside quotes is a literal quote and does
                // not toggle the quoted state.
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }

    fields.push(field);
    fields
}

/// Renders records as CSV: the canonical header, then one row per record
/// with every field quoted and internal quotes doubled.
pub fn write_csv(records: &[BookRecord]) -> String {
    let mut out = String::from(EXPORT_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&format!(
            "{},{},{}\n",
            quote_field(&record.name),
            quote_field(&record.khr),
            quote_field(&record.usd)
        ));
    }
    out
}

fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
