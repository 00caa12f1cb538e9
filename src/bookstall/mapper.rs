//! Maps loosely-headed tabular rows onto canonical records.
//!
//! Real-world exports disagree on header spellings, so each canonical field
//! resolves through a fixed priority list of accepted aliases. No row is
//! silently dropped: a row without a usable title still becomes a record
//! with an empty name (validating names is a manual-entry concern).

use crate::currency::{clean_currency, format_usd, khr_to_usd};
use crate::model::BookRecord;
use crate::workbook::SheetRow;
use std::collections::HashMap;

/// Accepted header spellings, in priority order.
const NAME_ALIASES: [&str; 3] = ["book title", "title", "name"];
const KHR_ALIASES: [&str; 3] = ["price/unit", "khr", "price (khr)"];
const USD_KEY: &str = "usd";

/// Maps parsed CSV rows to records using the (trimmed, lowercased) header
/// row as keys. Missing trailing cells read as empty.
pub fn map_rows_to_records(header: &[String], rows: &[Vec<String>]) -> Vec<BookRecord> {
    let keys: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();
    rows.iter()
        .map(|row| {
            let mut keyed: HashMap<String, String> = HashMap::new();
            for (i, key) in keys.iter().enumerate() {
                keyed.insert(key.clone(), row.get(i).cloned().unwrap_or_default());
            }
            record_from_keyed(&keyed)
        })
        .collect()
}

/// Spreadsheet rows arrive already keyed by natural-case headers;
/// normalizing the keys folds "Book Title" and "book title" into the same
/// alias lookup the CSV path uses.
pub fn map_sheet_rows(rows: &[SheetRow]) -> Vec<BookRecord> {
    rows.iter()
        .map(|row| {
            let keyed: HashMap<String, String> = row
                .iter()
                .map(|(k, v)| (k.trim().to_lowercase(), v.clone()))
                .collect();
            record_from_keyed(&keyed)
        })
        .collect()
}

fn record_from_keyed(keyed: &HashMap<String, String>) -> BookRecord {
    let name = resolve(keyed, &NAME_ALIASES).trim().to_string();
    let khr = clean_currency(Some(&resolve(keyed, &KHR_ALIASES)));

    // An explicit USD column wins over the derived rate, even when the two
    // disagree (manual override).
    let usd = match keyed.get(USD_KEY).filter(|v| !v.trim().is_empty()) {
        Some(explicit) => format_usd(explicit),
        None => khr_to_usd(&khr),
    };

    BookRecord::new(name, khr, usd)
}

fn resolve(keyed: &HashMap<String, String>, aliases: &[&str]) -> String {
    for alias in aliases {
        if let Some(value) = keyed.get(*alias) {
            return value.clone();
        }
    }
    String::new()
}
