//! # Bookstall Architecture
//!
//! Bookstall is a **UI-agnostic inventory library** for a small bookstore,
//! with a CLI client layered on top. The split matters: everything from
//! [`api`] inward takes plain Rust arguments, returns structured
//! `Result<CmdResult>` values, and never touches stdout, stderr or the
//! process exit code. The same core could serve a TUI or a web front end.
//!
//! ## Layers
//!
//! ```text
//! CLI (main.rs, args.rs, cli/)   argument parsing, colored output
//!          │
//! API facade (api.rs)            normalizes display positions to record ids
//!          │
//! Commands (commands/*.rs)       business logic, one module per operation
//!          │
//! Book store (books.rs)          ordered sequence + persist-then-reindex
//!          │
//! Storage (store/)               StateStore trait: FileStore / MemoryStore
//! ```
//!
//! ## The ingestion pipeline
//!
//! Imports flow raw bytes → [`tabular`] (or [`workbook`] for spreadsheets)
//! → [`mapper`] → [`books`]. The mapper tolerates several header spellings
//! per field and the [`currency`] normalizer reduces free-form prices to
//! canonical strings, deriving USD from KHR at a fixed rate unless the
//! source supplied USD explicitly.
//!
//! ## Consistency rules
//!
//! - Every store mutation persists the full sequence, then rebuilds the
//!   search index; the index is derived state and is never persisted.
//! - Positions are not stable across mutation. Records carry an in-memory
//!   id; the API resolves a displayed position to an id, and commands
//!   resolve the id back to a position at mutation time.
//! - Normalization failures degrade to empty strings ("unknown"), never to
//!   zero and never to a panic.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`books`]: The record sequence and its mutation paths
//! - [`store`]: Key-value persistence seam and implementations
//! - [`index`]: Derived search index
//! - [`tabular`]: Delimited-text parsing and CSV writing
//! - [`workbook`]: Spreadsheet adapter (calamine)
//! - [`mapper`]: Header-alias resolution, row → record mapping
//! - [`currency`]: Price cleaning and KHR→USD derivation
//! - [`model`]: Core data types (`BookRecord`, `Theme`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod books;
pub mod commands;
pub mod config;
pub mod currency;
pub mod error;
pub mod index;
pub mod mapper;
pub mod model;
pub mod store;
pub mod tabular;
pub mod workbook;
