//! JSON-file preference storage for the CLI.
//!
//! The file holds one flat object of string values, mirroring what the
//! browser keeps in `localStorage`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ckd_client::util::storage::{StorageBackend, StorageError};

/// Preferences persisted in a single JSON file.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(StorageError::Backend(err.to_string())),
        }
    }
}

impl StorageBackend for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_all()?;
        items.insert(key.to_owned(), value.to_owned());
        let raw = serde_json::to_string_pretty(&items)?;
        fs::write(&self.path, raw).map_err(|err| StorageError::Backend(err.to_string()))?;
        tracing::debug!(path = %self.path.display(), key, "preference written");
        Ok(())
    }
}
