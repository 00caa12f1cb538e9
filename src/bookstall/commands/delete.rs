use crate::books::BookStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookstallError, Result};
use crate::store::StateStore;
use uuid::Uuid;

pub fn run<S: StateStore>(store: &mut BookStore<S>, id: Uuid) -> Result<CmdResult> {
    let resolved = store
        .position_of(id)
        .and_then(|position| store.get(position).cloned().map(|r| (position, r)));
    let Some((position, record)) = resolved else {
        return Err(BookstallError::Api("Record no longer exists".into()));
    };

    store.delete_at(position)?;

    let mut result = CmdResult::default().with_affected_books(vec![record.clone()]);
    result.add_message(CmdMessage::success(format!("Deleted: {}", record.name)));
    Ok(result)
}
