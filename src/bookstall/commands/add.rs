use crate::books::BookStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::currency::{clean_currency, format_usd, khr_to_usd};
use crate::error::{BookstallError, Result};
use crate::model::BookRecord;
use crate::store::StateStore;

pub fn run<S: StateStore>(
    store: &mut BookStore<S>,
    name: String,
    khr: Option<String>,
    usd: Option<String>,
) -> Result<CmdResult> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(BookstallError::Api("Book name cannot be empty".into()));
    }

    let khr = clean_currency(khr.as_deref());
    // An explicit USD is a manual override; otherwise it tracks KHR.
    let usd = match usd {
        Some(explicit) => format_usd(&explicit),
        None => khr_to_usd(&khr),
    };

    let record = BookRecord::new(name, khr, usd);
    store.insert_front(record.clone())?;

    let mut result = CmdResult::default().with_affected_books(vec![record.clone()]);
    result.add_message(CmdMessage::success(format!("Added: {}", record.name)));
    Ok(result)
}
