//! Spreadsheet import via calamine.
//!
//! Only the first sheet is read. The first row is treated as the header and
//! every following row becomes a map keyed by the header's natural-case cell
//! text; the workbook format itself is an opaque collaborator concern.

use crate::error::Result;
use calamine::{open_workbook_auto, Data, Reader};
use std::collections::HashMap;
use std::path::Path;

/// A sheet row keyed by column header.
pub type SheetRow = HashMap<String, String>;

/// Reads the first sheet of a workbook into header-keyed rows.
///
/// `None` means the workbook had no rows at all (no sheets, or an empty first
/// sheet); `Some` carries the data rows once a header row exists, which may
/// be zero rows for a header-only sheet. Rows whose every cell is blank are
/// skipped, mirroring the blank-line rule of the delimited-text parser.
pub fn read_sheet_rows(path: &Path) -> Result<Option<Vec<SheetRow>>> {
    let mut workbook = open_workbook_auto(path)?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        return Ok(None);
    };
    let range = range?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(None);
    };
    let headers: Vec<String> = header.iter().map(cell_text).collect();

    let mut out = Vec::new();
    for row in rows {
        let cells: Vec<String> = row.iter().map(cell_text).collect();
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        let mut keyed = SheetRow::new();
        for (i, key) in headers.iter().enumerate() {
            keyed.insert(key.clone(), cells.get(i).cloned().unwrap_or_default());
        }
        out.push(keyed);
    }
    Ok(Some(out))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_number(*f),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

// Spreadsheets hand back every number as f64; render whole amounts without
// the trailing ".0" so "4000" survives the trip.
fn format_number(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
