use crate::books::BookStore;
use crate::commands::{BookPatch, CmdMessage, CmdResult};
use crate::currency::{clean_currency, format_usd, khr_to_usd};
use crate::error::{BookstallError, Result};
use crate::store::StateStore;
use uuid::Uuid;

/// Applies a patch to the record identified by `id`, resolving it to a
/// position only now, against the current sequence.
pub fn run<S: StateStore>(
    store: &mut BookStore<S>,
    id: Uuid,
    patch: BookPatch,
) -> Result<CmdResult> {
    let Some(position) = store.position_of(id) else {
        return Err(BookstallError::Api("Record no longer exists".into()));
    };
    let Some(mut record) = store.get(position).cloned() else {
        return Err(BookstallError::Api("Record no longer exists".into()));
    };

    if let Some(name) = patch.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(BookstallError::Api("Book name cannot be empty".into()));
        }
        record.name = name;
    }

    let khr_edited = patch.khr.is_some();
    if let Some(khr) = patch.khr {
        record.khr = clean_currency(Some(&khr));
    }
    match patch.usd {
        // Explicitly supplied USD is a manual override and is kept as given.
        Some(explicit) => record.usd = format_usd(&explicit),
        // Editing KHR without supplying USD re-derives it live.
        None if khr_edited => record.usd = khr_to_usd(&record.khr),
        None => {}
    }

    store.update_at(position, record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated ({}): {}",
        position + 1,
        record.name
    )));
    Ok(result.with_affected_books(vec![record]))
}
