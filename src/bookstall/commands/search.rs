use crate::books::BookStore;
use crate::commands::{list, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StateStore;

pub fn run<S: StateStore>(store: &BookStore<S>, term: &str) -> Result<CmdResult> {
    let mut result = list::run(store, Some(term))?;
    if result.listed_books.is_empty() {
        result.add_message(CmdMessage::info(format!("No matches for \"{}\"", term)));
    }
    Ok(result)
}
