use crate::books::BookStore;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::mapper::map_rows_to_records;
use crate::store::StateStore;
use crate::tabular::parse_delimited_text;
use std::fs;
use std::path::Path;

/// Seeds an empty store from an optional bundled CSV.
///
/// Existing user data is never overwritten: a non-empty store makes this a
/// no-op. A missing or unreadable seed file means the feature is absent and
/// is silently ignored.
pub fn run<S: StateStore>(store: &mut BookStore<S>, path: &Path) -> Result<CmdResult> {
    if !store.is_empty() {
        return Ok(CmdResult::default());
    }
    let Ok(text) = fs::read_to_string(path) else {
        return Ok(CmdResult::default());
    };

    let rows = parse_delimited_text(&text);
    let Some((header, data)) = rows.split_first() else {
        return Ok(CmdResult::default());
    };
    let records = map_rows_to_records(header, data);
    if records.is_empty() {
        return Ok(CmdResult::default());
    }

    store.replace_all(records)?;
    Ok(CmdResult::default())
}
