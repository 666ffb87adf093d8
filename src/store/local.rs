//! Flat-file key/value store
//!
//! One text document per key, one file per key under the store's root
//! directory. Writes replace the whole document, so concurrent writers are
//! last-writer-wins with no merging.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{StoreError, StoreResult};

/// Key/value store over plain files in a single directory
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl AsRef<Path>) -> StoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory the store keeps its documents in
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read the document stored under `key`, if any
    pub fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Write `value` under `key`, replacing any previous document
    pub fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.key_path(key)?;
        fs::write(path, value)?;
        debug!(key, bytes = value.len(), "stored document");
        Ok(())
    }

    /// Delete the document under `key`; absent keys are a no-op
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Keys are used directly as file names, so they are restricted to
    /// alphanumerics, `_` and `-`
    fn key_path(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}
