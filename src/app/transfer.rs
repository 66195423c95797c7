//! Bulk export and import of the collection as JSON files.
//!
//! Export is synchronous up to the file write, which the worker performs. Import is
//! split around the worker read:
//!
//! ```text
//! begin_import ──► Reading ──► complete_import
//!                               ├─ read failed        → Read error
//!                               ├─ not JSON           → Parse error
//!                               ├─ not an array       → Shape error
//!                               ├─ element invalid    → Schema error
//!                               └─ all valid          → commit
//! ```
//!
//! Every outcome returns the transfer to `Idle` and clears the path chooser. The
//! collection changes only in the last branch, after the whole batch validated.

use crate::domain::error::{QuotebookError, Result};
use crate::domain::Quote;
use crate::storage::QuoteStore;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// File name used for exports.
pub const EXPORT_FILE_NAME: &str = "quotes.json";

/// Extension suggested by the import chooser. Other files are still accepted.
pub const IMPORT_EXTENSION_HINT: &str = "*.json";

/// A serialized collection ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub path: PathBuf,
    pub contents: String,
    pub count: usize,
}

/// Progress of the current import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportState {
    Idle,
    /// The worker is reading `path`.
    Reading { path: String },
}

/// Controls of a constructed transfer panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSurface {
    /// Path typed into the import chooser.
    pub chooser: String,
}

/// Export/import coordinator.
#[derive(Debug, Clone)]
pub struct Transfer {
    export_dir: PathBuf,
    surface: Option<TransferSurface>,
    state: ImportState,
}

impl Transfer {
    #[must_use]
    pub const fn new(export_dir: PathBuf) -> Self {
        Self {
            export_dir,
            surface: None,
            state: ImportState::Idle,
        }
    }

    /// Builds the export/import controls if they do not exist yet.
    ///
    /// Returns `true` if this call created them.
    pub fn ensure_initialized(&mut self) -> bool {
        if self.surface.is_some() {
            return false;
        }
        tracing::debug!("building transfer controls");
        self.surface = Some(TransferSurface {
            chooser: String::new(),
        });
        true
    }

    #[must_use]
    pub const fn surface(&self) -> Option<&TransferSurface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub const fn state(&self) -> &ImportState {
        &self.state
    }

    /// Whether a read of `path` is in flight.
    #[must_use]
    pub fn is_awaiting(&self, path: &str) -> bool {
        matches!(&self.state, ImportState::Reading { path: p } if p == path)
    }

    /// Where exports are written.
    #[must_use]
    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(EXPORT_FILE_NAME)
    }

    /// Types a character into the import chooser.
    pub fn push_char(&mut self, c: char) {
        if let Some(surface) = self.surface.as_mut() {
            surface.chooser.push(c);
        }
    }

    /// Deletes the last character of the import chooser.
    pub fn backspace(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.chooser.pop();
        }
    }

    /// Clears the chooser so the same file can be chosen again.
    pub fn reset_chooser(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.chooser.clear();
        }
    }

    /// Serializes the whole collection as indented JSON.
    ///
    /// # Errors
    ///
    /// - [`NothingToExport`](QuotebookError::NothingToExport) if the collection is empty
    /// - [`Storage`](QuotebookError::Storage) if serialization fails
    pub fn export(&self, store: &QuoteStore) -> Result<ExportFile> {
        if store.is_empty() {
            return Err(QuotebookError::NothingToExport);
        }

        let contents = serde_json::to_string_pretty(store.quotes())
            .map_err(|e| QuotebookError::Storage(format!("failed to serialize quotes: {e}")))?;

        Ok(ExportFile {
            path: self.export_path(),
            contents,
            count: store.len(),
        })
    }

    /// Starts importing the file named in the chooser.
    ///
    /// `resolve` maps the typed path to a host path. Returns the resolved path the
    /// worker should read.
    ///
    /// # Errors
    ///
    /// - [`ImportInProgress`](QuotebookError::ImportInProgress) while a read is in flight
    /// - [`Validation`](QuotebookError::Validation) if no path was entered
    pub fn begin_import(&mut self, resolve: impl FnOnce(&str) -> String) -> Result<String> {
        if let ImportState::Reading { path } = &self.state {
            return Err(QuotebookError::ImportInProgress { path: path.clone() });
        }

        let typed = self
            .surface
            .as_ref()
            .map_or("", |s| s.chooser.trim());
        if typed.is_empty() {
            return Err(QuotebookError::Validation(
                "Please choose a file to import.".to_string(),
            ));
        }

        let path = resolve(typed);
        if !Path::new(&path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            tracing::debug!(path = %path, "import file does not look like JSON, reading anyway");
        }

        tracing::debug!(path = %path, "import reading");
        self.state = ImportState::Reading { path: path.clone() };
        Ok(path)
    }

    /// Finishes the in-flight import with the worker's read result.
    ///
    /// Returns the number of quotes appended.
    ///
    /// # Errors
    ///
    /// [`Read`](QuotebookError::Read), [`Parse`](QuotebookError::Parse),
    /// [`Shape`](QuotebookError::Shape) or [`Schema`](QuotebookError::Schema), all
    /// without touching `store`; or a storage error if the final save fails, in
    /// which case `store` is also left unchanged.
    pub fn complete_import(
        &mut self,
        read: std::result::Result<String, String>,
        store: &mut QuoteStore,
    ) -> Result<usize> {
        let path = match std::mem::replace(&mut self.state, ImportState::Idle) {
            ImportState::Reading { path } => path,
            ImportState::Idle => String::new(),
        };
        self.reset_chooser();

        let _span = tracing::debug_span!("complete_import", path = %path).entered();

        let contents = read.map_err(|message| QuotebookError::Read {
            path: path.clone(),
            message,
        })?;
        let count = store.commit(parse_import(&contents)?)?;

        tracing::debug!(count = count, total = store.len(), "import committed");
        Ok(count)
    }
}

/// Parses and validates an import document.
///
/// The document must be a JSON array whose every element is an object with string
/// `text` and `category` members. Extra members are ignored. Values are taken as-is.
///
/// # Errors
///
/// [`Parse`](QuotebookError::Parse) for malformed JSON, [`Shape`](QuotebookError::Shape)
/// for a non-array document, [`Schema`](QuotebookError::Schema) for the first element
/// that does not fit.
///
/// # Examples
///
/// ```
/// use quotebook::app::transfer::parse_import;
///
/// let quotes = parse_import(r#"[{"text": "Hi", "category": "Greeting", "likes": 3}]"#).unwrap();
/// assert_eq!(quotes[0].text, "Hi");
///
/// assert!(parse_import(r#"{"text": "Hi"}"#).is_err());
/// ```
pub fn parse_import(contents: &str) -> Result<Vec<Quote>> {
    let value: Value =
        serde_json::from_str(contents).map_err(|e| QuotebookError::Parse(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(QuotebookError::Shape);
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let text = item.get("text").and_then(Value::as_str);
            let category = item.get("category").and_then(Value::as_str);
            match (text, category) {
                (Some(text), Some(category)) => Ok(Quote::new(text, category)),
                _ => Err(QuotebookError::Schema { index }),
            }
        })
        .collect()
}
