//! File storage
//!
//! One JSON file per key inside a data directory.
//!
//! ## Responsibilities
//! - Create the data directory on open
//! - Map keys to `{key}.json` file names
//! - Replace values atomically (write temp, fsync, rename)

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::{validate_key, KeyValueStorage};

/// Directory-backed key-value storage
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding one file per key
    data_dir: PathBuf,
}

impl FileStorage {
    // =========================================================================
    // Internal Path Constants
    // =========================================================================
    const VALUE_EXT: &'static str = "json";
    const TMP_EXT: &'static str = "json.tmp";

    /// Open or create storage in the given directory
    pub fn open(path: &Path) -> Result<Self> {
        fs::create_dir_all(path)?;

        Ok(Self {
            data_dir: path.to_path_buf(),
        })
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File that holds the value for `key`
    pub fn value_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", key, Self::VALUE_EXT))
    }

    fn tmp_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", key, Self::TMP_EXT))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;

        match fs::read_to_string(self.value_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;

        let tmp_path = self.tmp_path(key);
        let final_path = self.value_path(key);

        let mut file = File::create(&tmp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp_path, &final_path)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        validate_key(key)?;

        match fs::remove_file(self.value_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
