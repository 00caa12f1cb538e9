use crate::books::BookStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::mapper::{map_rows_to_records, map_sheet_rows};
use crate::model::BookRecord;
use crate::store::StateStore;
use crate::tabular::parse_delimited_text;
use crate::workbook;
use std::fs;
use std::path::Path;

const SHEET_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "ods"];

/// Replaces the whole store with the file's contents, adopting the file's
/// row order. Any read or parse failure is surfaced as a single message and
/// leaves the store untouched; there is no partial replace.
pub fn run<S: StateStore>(store: &mut BookStore<S>, path: &Path) -> Result<CmdResult> {
    let parsed = if is_sheet(path) {
        match workbook::read_sheet_rows(path) {
            Ok(rows) => rows.map(|rows| map_sheet_rows(&rows)),
            Err(e) => return Ok(read_failure(path, e)),
        }
    } else {
        match fs::read_to_string(path) {
            Ok(text) => csv_records(&text),
            Err(e) => return Ok(read_failure(path, e)),
        }
    };

    install(store, parsed, path)
}

/// Shared tail for both formats. `None` (no rows at all, not even a header)
/// leaves the store untouched; `Some` replaces it wholesale, including the
/// zero-record replace a header-only file produces.
fn install<S: StateStore>(
    store: &mut BookStore<S>,
    parsed: Option<Vec<BookRecord>>,
    path: &Path,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(records) = parsed else {
        result.add_message(CmdMessage::warning(format!(
            "{} is empty, nothing imported",
            path.display()
        )));
        return Ok(result);
    };

    let count = records.len();
    store.replace_all(records)?;
    result.add_message(CmdMessage::success(format!(
        "Imported {} record(s) from {}",
        count,
        path.display()
    )));
    Ok(result)
}

fn read_failure(path: &Path, err: impl std::fmt::Display) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(format!(
        "Could not read {}: {}",
        path.display(),
        err
    )));
    result
}

/// `None` means the file had no rows at all (not even a header).
fn csv_records(text: &str) -> Option<Vec<BookRecord>> {
    let rows = parse_delimited_text(text);
    let (header, data) = rows.split_first()?;
    Some(map_rows_to_records(header, data))
}

fn is_sheet(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            SHEET_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn replaces_store_with_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("inventory.csv");
        fs::write(&file, "Book Title,Price/Unit,USD\nAlpha,4000,\nBeta,8000,\n").unwrap();

        let mut store = fixtures::seeded_store(&[("Stale", "1", "0.00")]);
        let result = run(&mut store, &file).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].name, "Alpha");
        assert_eq!(store.records()[0].usd, "1.00");
        assert_eq!(store.records()[1].name, "Beta");
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Success
        ));
    }

    #[test]
    fn empty_file_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("empty.csv");
        fs::write(&file, "\n  \n").unwrap();

        let mut store = fixtures::seeded_store(&[("Keep", "4000", "1.00")]);
        let result = run(&mut store, &file).unwrap();

        assert_eq!(store.len(), 1);
        assert!(result.messages[0].content.contains("empty"));
    }

    #[test]
    fn unreadable_file_leaves_store_untouched() {
        let mut store = fixtures::seeded_store(&[("Keep", "4000", "1.00")]);
        let result = run(&mut store, Path::new("does-not-exist.csv")).unwrap();

        assert_eq!(store.len(), 1);
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Error
        ));
    }

    #[test]
    fn header_only_file_clears_the_store() {
        // Zero data rows is a valid import of zero records.
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("header.csv");
        fs::write(&file, "Book Title,Price/Unit,USD\n").unwrap();

        let mut store = fixtures::seeded_store(&[("Old", "4000", "1.00")]);
        run(&mut store, &file).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn header_only_sheet_clears_the_store() {
        // A header-only workbook maps to zero records and replaces the
        // store, exactly like a header-only CSV.
        let mut store = fixtures::seeded_store(&[("Old", "4000", "1.00")]);
        let rows: Vec<crate::workbook::SheetRow> = Vec::new();
        let parsed = Some(map_sheet_rows(&rows));

        let result = install(&mut store, parsed, Path::new("header.xlsx")).unwrap();

        assert!(store.is_empty());
        assert!(result.messages[0].content.contains("Imported 0 record(s)"));
    }

    #[test]
    fn rowless_sheet_leaves_store_untouched() {
        let mut store = fixtures::seeded_store(&[("Keep", "4000", "1.00")]);

        let result = install(&mut store, None, Path::new("blank.xlsx")).unwrap();

        assert_eq!(store.len(), 1);
        assert!(result.messages[0].content.contains("empty"));
    }

    #[test]
    fn sheet_extensions_are_detected() {
        assert!(is_sheet(Path::new("books.xlsx")));
        assert!(is_sheet(Path::new("BOOKS.XLS")));
        assert!(!is_sheet(Path::new("books.csv")));
        assert!(!is_sheet(Path::new("books")));
    }
}
