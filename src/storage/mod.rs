//! Storage Module
//!
//! Key-value persistence for the book collection.
//!
//! ## Responsibilities
//! - Abstract over where the JSON array lives (`KeyValueStorage`)
//! - Keep an in-process map for tests and embedding (`MemoryStorage`)
//! - Keep one file per key on disk for the CLI (`FileStorage`)
//! - Load leniently, save wholesale
//!
//! ## On-disk Layout (`FileStorage`)
//! ```text
//! {data_dir}/
//!   ├── BOOKSHELF_APPS_books.json      (current value)
//!   └── BOOKSHELF_APPS_books.json.tmp  (only during an atomic write)
//! ```

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::collections::HashSet;

use crate::book::Book;
use crate::error::{BookshelfError, Result};

/// A string-to-string store, modelled on browser `localStorage`
pub trait KeyValueStorage {
    /// Read the value under `key`, `None` if absent
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Drop `key`; absent keys are not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Check that a key is usable as a file name
///
/// Allowed: ASCII alphanumerics, `_`, `-`, `.`; must not start with `.`.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(BookshelfError::Storage("empty storage key".into()));
    }
    if key.starts_with('.') {
        return Err(BookshelfError::Storage(format!(
            "storage key must not start with '.': {:?}",
            key
        )));
    }
    if let Some(c) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
    {
        return Err(BookshelfError::Storage(format!(
            "invalid character {:?} in storage key {:?}",
            c, key
        )));
    }
    Ok(())
}

/// Load the book array stored under `key`
///
/// Never fails: a missing key, an unreadable backend, or anything that is
/// not a JSON array of books yields an empty collection. Records repeating
/// an earlier id are dropped.
pub fn load_books<S: KeyValueStorage + ?Sized>(storage: &S, key: &str) -> Vec<Book> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no stored books, starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored books, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Book>>(&raw) {
        Ok(mut books) => {
            let stored = books.len();
            let mut seen = HashSet::with_capacity(stored);
            books.retain(|b| seen.insert(b.id));
            if books.len() < stored {
                tracing::warn!(
                    key,
                    dropped = stored - books.len(),
                    "stored books have duplicate ids, keeping the first of each"
                );
            }
            tracing::debug!(key, count = books.len(), "loaded books");
            books
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "stored books are malformed, starting empty");
            Vec::new()
        }
    }
}

/// Overwrite the value under `key` with the whole collection
pub fn save_books<S: KeyValueStorage + ?Sized>(storage: &S, key: &str, books: &[Book]) -> Result<()> {
    let json = serde_json::to_string(books)?;
    storage.set_item(key, &json)
}
