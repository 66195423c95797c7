//! JSON file-based key-value backend.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a temporary sibling first and are
//! then renamed over the target, so a crash never leaves a half-written document.
//!
//! # File Layout
//!
//! ```text
//! ~/.local/share/zellij/quotebook/
//! ├── quotes.json              ← durable collection
//! └── quotebook-otlp.json      ← traces (written by observability, not this backend)
//!
//! /tmp/quotebook/session-4242/
//! └── lastViewedQuote.json     ← session cache
//! ```

use crate::domain::error::{QuotebookError, Result};
use crate::storage::backend::KeyValueStore;
use std::path::{Path, PathBuf};

/// Extension given to every stored document.
const DOCUMENT_EXTENSION: &str = "json";

/// Directory-backed key-value store with atomic writes.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. The plugin touches it only from its main
/// thread.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Directory holding one document per key.
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens (creating if necessary) a store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use quotebook::storage::{JsonFileStore, KeyValueStore};
    ///
    /// let mut store = JsonFileStore::open("/tmp/quotebook-demo")?;
    /// store.set("quotes", "[]")?;
    /// assert_eq!(store.get("quotes")?.as_deref(), Some("[]"));
    /// # Ok::<(), quotebook::QuotebookError>(())
    /// ```
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tracing::debug!(dir = ?dir, "opening JSON file store");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Maps a key to its document path, rejecting keys that would escape the directory.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(QuotebookError::Config(format!("invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.{DOCUMENT_EXTENSION}")))
    }
}

/// Writes `contents` to `path` through a temporary sibling and a rename.
///
/// Shared with the worker's export writes.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be written or renamed.
pub fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let tmp_path = path.with_extension("tmp");

    tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
    std::fs::write(&tmp_path, contents)?;

    tracing::trace!("renaming temporary file to final location");
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        let _span = tracing::debug_span!("json_store_get", path = ?path).entered();

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(bytes = contents.len(), "document loaded");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("document absent");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let _span = tracing::debug_span!("json_store_set", path = ?path, bytes = value.len()).entered();

        write_atomic(&path, value)?;
        tracing::debug!("document saved");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
