// SPDX-License-Identifier: MPL-2.0
//! String key-value store persisted as CBOR.
//!
//! This is the application's "local storage": small values that should survive a
//! restart but are not user-editable preferences (those live in `settings.toml`).
//! Every write rewrites the whole file.
//!
//! # Path Resolution
//!
//! 1. Use [`LocalStorage::open`] with an explicit file path
//! 2. Set `FRONT_FLOW_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Storage file name within the app data directory.
const STORAGE_FILE: &str = "local_storage.cbor";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalStorage {
    path: Option<PathBuf>,
    items: BTreeMap<String, String>,
}

impl LocalStorage {
    /// A store that is never written to disk.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens the store in the default data directory.
    ///
    /// Returns the store and an optional error describing why existing contents
    /// could not be read. The store stays bound to its file either way.
    pub fn load() -> (Self, Option<Error>) {
        Self::load_from(None)
    }

    /// Opens the store in `base_dir`, or the default data directory when `None`.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<Error>) {
        match paths::get_app_data_dir_with_override(base_dir) {
            Some(dir) => Self::open(dir.join(STORAGE_FILE)),
            None => (
                Self::in_memory(),
                Some(Error::Storage("no data directory available".to_string())),
            ),
        }
    }

    /// Opens the store backed by `path`, reading it if it exists.
    pub fn open(path: PathBuf) -> (Self, Option<Error>) {
        let mut storage = Self {
            path: Some(path),
            items: BTreeMap::new(),
        };

        match storage.read() {
            Ok(Some(items)) => {
                storage.items = items;
                (storage, None)
            }
            Ok(None) => (storage, None),
            Err(err) => (storage, Some(err)),
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Stores `value` under `key` and flushes the file.
    pub fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn read(&self) -> Result<Option<BTreeMap<String, String>>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let reader = BufReader::new(fs::File::open(path)?);
        let items = ciborium::from_reader(reader)?;
        Ok(Some(items))
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(fs::File::create(path)?);
        ciborium::into_writer(&self.items, writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn in_memory_store_keeps_values() {
        let mut storage = LocalStorage::in_memory();
        storage.set_item("key", "value").expect("in-memory write");
        assert_eq!(storage.get_item("key"), Some("value"));
        assert!(storage.path().is_none());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join(STORAGE_FILE);

        let (mut storage, warning) = LocalStorage::open(path.clone());
        assert!(warning.is_none());
        storage.set_item("front-flow-language", "pt-BR").unwrap();
        storage.set_item("other", "x").unwrap();

        let (reloaded, warning) = LocalStorage::open(path);
        assert!(warning.is_none());
        assert_eq!(reloaded.get_item("front-flow-language"), Some("pt-BR"));
        assert_eq!(reloaded.get_item("other"), Some("x"));
    }

    #[test]
    fn overwriting_a_key_keeps_latest_value() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(STORAGE_FILE);

        let (mut storage, _) = LocalStorage::open(path.clone());
        storage.set_item("lang", "en-US").unwrap();
        storage.set_item("lang", "pt-BR").unwrap();

        let (reloaded, _) = LocalStorage::open(path);
        assert_eq!(reloaded.get_item("lang"), Some("pt-BR"));
    }

    #[test]
    fn corrupted_file_reports_error_and_starts_empty() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(STORAGE_FILE);
        fs::write(&path, b"definitely not cbor").unwrap();

        let (storage, warning) = LocalStorage::open(path.clone());
        assert!(matches!(warning, Some(Error::Storage(_))));
        assert_eq!(storage.get_item("lang"), None);
        assert_eq!(storage.path(), Some(path.as_path()));
    }

    #[test]
    fn load_from_uses_storage_file_in_base_dir() {
        let dir = tempdir().expect("failed to create temp dir");
        let (mut storage, warning) = LocalStorage::load_from(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        storage.set_item("k", "v").unwrap();
        assert!(dir.path().join(STORAGE_FILE).exists());
    }
}
