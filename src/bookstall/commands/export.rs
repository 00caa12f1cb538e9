use crate::books::BookStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookstallError, Result};
use crate::store::StateStore;
use crate::tabular::write_csv;
use std::fs;
use std::path::Path;

pub fn run<S: StateStore>(store: &BookStore<S>, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.is_empty() {
        result.add_message(CmdMessage::info("Nothing to export."));
        return Ok(result);
    }

    let csv = write_csv(store.records());
    fs::write(path, csv).map_err(BookstallError::Io)?;

    result.exported_to = Some(path.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "Exported {} record(s) to {}",
        store.len(),
        path.display()
    )));
    Ok(result)
}
