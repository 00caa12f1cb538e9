use crate::config::BookstallConfig;
use crate::model::{BookRecord, Theme};
use std::path::PathBuf;

pub mod add;
pub mod bootstrap;
pub mod config;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod search;
pub mod theme;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record paired with the 1-based position it was listed at.
#[derive(Debug, Clone)]
pub struct ListedBook {
    pub position: usize,
    pub record: BookRecord,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<BookRecord>,
    pub listed_books: Vec<ListedBook>,
    pub exported_to: Option<PathBuf>,
    pub theme: Option<Theme>,
    pub config: Option<BookstallConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, records: Vec<BookRecord>) -> Self {
        self.affected_books = records;
        self
    }

    pub fn with_listed_books(mut self, listed: Vec<ListedBook>) -> Self {
        self.listed_books = listed;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_config(mut self, config: BookstallConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field edits for a single record; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub name: Option<String>,
    pub khr: Option<String>,
    pub usd: Option<String>,
}
