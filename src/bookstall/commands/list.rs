use crate::books::BookStore;
use crate::commands::{CmdResult, ListedBook};
use crate::error::Result;
use crate::store::StateStore;

/// Lists the inventory, optionally filtered through the search index. The
/// empty filter means "show all".
pub fn run<S: StateStore>(store: &BookStore<S>, filter: Option<&str>) -> Result<CmdResult> {
    let positions = store.query(filter.unwrap_or(""));
    let listed = positions
        .into_iter()
        .filter_map(|position| {
            store.get(position).map(|record| ListedBook {
                position: position + 1,
                record: record.clone(),
            })
        })
        .collect();
    Ok(CmdResult::default().with_listed_books(listed))
}
