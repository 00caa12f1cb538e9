//! # API Facade
//!
//! The single entry point for all bookstall operations, regardless of the
//! UI driving them. The facade dispatches to the command layer and does the
//! one piece of input normalization every UI needs: turning a 1-based
//! display position into the record's stable id *before* mutating, since
//! positions are invalidated by any structural change to the sequence.
//!
//! No business logic lives here, and nothing here touches stdout or stderr.

use crate::books::BookStore;
use crate::commands::config::ConfigAction;
use crate::commands::{self, BookPatch, CmdResult};
use crate::error::{BookstallError, Result};
use crate::model::Theme;
use crate::store::StateStore;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// The main API facade, generic over the persistence backend. The data
/// directory is carried for the operations that live beside the store
/// (`config.json`) rather than inside it.
pub struct BookstallApi<S: StateStore> {
    store: BookStore<S>,
    data_dir: PathBuf,
}

impl<S: StateStore> BookstallApi<S> {
    pub fn new(store: BookStore<S>, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn add_book(
        &mut self,
        name: String,
        khr: Option<String>,
        usd: Option<String>,
    ) -> Result<CmdResult> {
        commands::add::run(&mut self.store, name, khr, usd)
    }

    pub fn list_books(&self, filter: Option<&str>) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn search_books(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn update_book(&mut self, position: usize, patch: BookPatch) -> Result<CmdResult> {
        let id = self.resolve_position(position)?;
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_book(&mut self, position: usize) -> Result<CmdResult> {
        let id = self.resolve_position(position)?;
        commands::delete::run(&mut self.store, id)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn export_csv(&self, path: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn bootstrap(&mut self, path: &Path) -> Result<CmdResult> {
        commands::bootstrap::run(&mut self.store, path)
    }

    pub fn theme(&mut self, mode: Option<Theme>) -> Result<CmdResult> {
        commands::theme::run(&mut self.store, mode)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn current_theme(&self) -> Theme {
        self.store.theme()
    }

    // Display positions are 1-based and only meaningful against the current
    // sequence; resolve to a stable id before any mutation.
    fn resolve_position(&self, position: usize) -> Result<Uuid> {
        position
            .checked_sub(1)
            .and_then(|p| self.store.id_at(p))
            .ok_or_else(|| BookstallError::Api(format!("No record at position {}", position)))
    }
}
