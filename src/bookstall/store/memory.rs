use super::StateStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory slots for tests. No persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::books::BookStore;
    use crate::model::BookRecord;

    pub fn empty_store() -> BookStore<MemoryStore> {
        BookStore::hydrate(MemoryStore::new())
    }

    pub fn seeded_store(rows: &[(&str, &str, &str)]) -> BookStore<MemoryStore> {
        let mut store = empty_store();
        let records = rows
            .iter()
            .map(|(name, khr, usd)| {
                BookRecord::new(name.to_string(), khr.to_string(), usd.to_string())
            })
            .collect();
        store.replace_all(records).unwrap();
        store
    }
}
