//! Derived search index over the record sequence.
//!
//! One lowercase composite string per record, in record order. The index is
//! rebuilt wholesale after every mutation and never persisted; `entry[i]`
//! always describes `records[i]`.

use crate::model::BookRecord;

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<String>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild(&mut self, records: &[BookRecord]) {
        self.entries = records.iter().map(composite).collect();
    }

    /// Positions whose entry contains `q` as a case-insensitive substring,
    /// in original order. An empty query selects every position.
    pub fn query(&self, q: &str) -> Vec<usize> {
        let needle = q.to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| needle.is_empty() || entry.contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

fn composite(record: &BookRecord) -> String {
    format!("{} {} {}", record.name, record.khr, record.usd).to_lowercase()
}
