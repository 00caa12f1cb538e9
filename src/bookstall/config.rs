use crate::error::{BookstallError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOOTSTRAP_FILE: &str = "books.csv";
const DEFAULT_EXPORT_FILE: &str = "books_export.csv";

/// Configuration for bookstall, stored next to the data slots in
/// `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookstallConfig {
    /// CSV used to seed an empty store at startup, relative to the data
    /// directory. Its absence is not an error.
    #[serde(default = "default_bootstrap_file")]
    pub bootstrap_file: String,

    /// Filename the export command writes when no path is given.
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_bootstrap_file() -> String {
    DEFAULT_BOOTSTRAP_FILE.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for BookstallConfig {
    fn default() -> Self {
        Self {
            bootstrap_file: default_bootstrap_file(),
            export_file: default_export_file(),
        }
    }
}

impl BookstallConfig {
    /// Look up a value by its user-facing key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "bootstrap-file" => Some(self.bootstrap_file.clone()),
            "export-file" => Some(self.export_file.clone()),
            _ => None,
        }
    }

    /// Set a value by its user-facing key.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "bootstrap-file" => self.bootstrap_file = value.to_string(),
            "export-file" => self.export_file = value.to_string(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookstallError::Io)?;
        let config: BookstallConfig =
            serde_json::from_str(&content).map_err(BookstallError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookstallError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BookstallError::Serialization)?;
        fs::write(config_path, content).map_err(BookstallError::Io)?;
        Ok(())
    }
}
