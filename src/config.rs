//! Configuration for Bookshelf
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{BookshelfError, Result};
use crate::storage::validate_key;

/// Storage key the book array lives under
pub const DEFAULT_STORAGE_KEY: &str = "BOOKSHELF_APPS_books";

/// Main configuration for a Bookshelf instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the file-backed storage.
    /// Internal structure:
    ///   {data_dir}/
    ///     └── {storage_key}.json   (JSON array of books)
    pub data_dir: PathBuf,

    /// Key the book collection is stored under
    pub storage_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./bookshelf_data"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the config can be used to open a store
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(BookshelfError::Config("data_dir must not be empty".into()));
        }
        validate_key(&self.storage_key)
            .map_err(|e| BookshelfError::Config(format!("storage_key: {}", e)))
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for file storage)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the storage key
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
