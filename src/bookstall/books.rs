//! The ordered record sequence and its mutation paths.
//!
//! Every mutation runs the same tail: persist the full sequence, then
//! rebuild the search index. Persisting first means a crash between the two
//! leaves the on-disk slot correct; the index is always recomputable from
//! the sequence and is never itself persisted.
//!
//! Positions are not stable across structural mutation. Callers that need
//! to address a record across mutations hold its `id` and resolve it to a
//! position at call time ([`BookStore::position_of`]).

use crate::error::Result;
use crate::index::SearchIndex;
use crate::model::{BookRecord, Theme};
use crate::store::{StateStore, BOOKS_KEY, THEME_KEY};
use uuid::Uuid;

pub struct BookStore<S: StateStore> {
    backend: S,
    records: Vec<BookRecord>,
    index: SearchIndex,
}

impl<S: StateStore> BookStore<S> {
    /// Creates a store hydrated from the persisted slot. A missing,
    /// unreadable or corrupt slot counts as "no data" and yields an empty
    /// store; hydration never fails.
    pub fn hydrate(backend: S) -> Self {
        let records = Self::load_all(&backend);
        let mut index = SearchIndex::new();
        index.rebuild(&records);
        Self {
            backend,
            records,
            index,
        }
    }

    fn load_all(backend: &S) -> Vec<BookRecord> {
        let Ok(Some(raw)) = backend.get(BOOKS_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&BookRecord> {
        self.records.get(position)
    }

    pub fn id_at(&self, position: usize) -> Option<Uuid> {
        self.records.get(position).map(|r| r.id)
    }

    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Substring query against the derived index; see [`SearchIndex::query`].
    pub fn query(&self, q: &str) -> Vec<usize> {
        self.index.query(q)
    }

    pub fn search_index(&self) -> &SearchIndex {
        &self.index
    }

    /// Discards the current sequence and installs `records` wholesale,
    /// adopting their order.
    pub fn replace_all(&mut self, records: Vec<BookRecord>) -> Result<()> {
        self.records = records;
        self.commit()
    }

    /// Prepends a record; manual additions surface at the top of the list.
    pub fn insert_front(&mut self, record: BookRecord) -> Result<()> {
        self.records.insert(0, record);
        self.commit()
    }

    /// Replaces the record at `position`. Out of bounds is a silent no-op:
    /// positions must be validated against the current sequence by callers.
    pub fn update_at(&mut self, position: usize, record: BookRecord) -> Result<()> {
        if position >= self.records.len() {
            return Ok(());
        }
        self.records[position] = record;
        self.commit()
    }

    /// Removes the record at `position`, shifting later positions down by
    /// one. Out of bounds is a silent no-op.
    pub fn delete_at(&mut self, position: usize) -> Result<()> {
        if position >= self.records.len() {
            return Ok(());
        }
        self.records.remove(position);
        self.commit()
    }

    /// Serializes the full sequence into the books slot, overwriting any
    /// prior content.
    pub fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.records)?;
        self.backend.set(BOOKS_KEY, &raw)
    }

    pub fn theme(&self) -> Theme {
        match self.backend.get(THEME_KEY) {
            Ok(Some(raw)) => raw.trim().trim_matches('"').parse().unwrap_or_default(),
            _ => Theme::default(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.backend.set(THEME_KEY, theme.as_str())
    }

    // Persist first, reindex second (see module docs).
    fn commit(&mut self) -> Result<()> {
        self.persist()?;
        self.index.rebuild(&self.records);
        Ok(())
    }
}
