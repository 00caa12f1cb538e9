//! Key-value persistence seam.
//!
//! The whole inventory persists into a single string slot, with a second
//! slot for the display theme. The [`StateStore`] trait keeps the rest of
//! the crate decoupled from where those slots live:
//!
//! - [`fs::FileStore`]: production storage, one file per slot under the
//!   data directory.
//! - [`memory::MemoryStore`]: in-memory slots for tests.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Slot holding the JSON-serialized record array.
pub const BOOKS_KEY: &str = "books";
/// Slot holding the theme mode string ("light" | "dark").
pub const THEME_KEY: &str = "theme";

/// Abstract interface for the persisted slots.
pub trait StateStore {
    /// Read a slot. `Ok(None)` means the slot was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot wholesale. There is no merge and no versioning.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
