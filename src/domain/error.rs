//! Error types for the Quotebook plugin.
//!
//! This module defines the centralized error type [`QuotebookError`] and a type alias
//! [`Result`] used throughout the crate. Every user-facing failure (form validation,
//! import problems) and every infrastructure failure (storage, I/O, worker protocol)
//! is a variant here, so the event handler can turn any of them into a notice.

use thiserror::Error;

/// The main error type for Quotebook operations.
///
/// The first five variants are the user-facing taxonomy: they are terminal for the
/// action that produced them and never mutate the collection. The remaining variants
/// cover the plumbing underneath.
///
/// # Examples
///
/// ```
/// use quotebook::QuotebookError;
///
/// let err = QuotebookError::Schema { index: 2 };
/// assert!(err.to_string().contains("position 3"));
/// ```
#[derive(Debug, Error)]
pub enum QuotebookError {
    /// A required form field was empty after trimming.
    #[error("{0}")]
    Validation(String),

    /// The import file could not be read.
    #[error("Error reading file {path}: {message}")]
    Read {
        /// Path that was requested.
        path: String,
        /// Description reported by the worker.
        message: String,
    },

    /// The import file is not well-formed JSON.
    ///
    /// Carries the parser's own message.
    #[error("Error parsing JSON file: {0}")]
    Parse(String),

    /// The import file parsed, but the top-level value is not an array.
    #[error("Invalid JSON format: an array of quotes is expected")]
    Shape,

    /// An imported element is not an object with string `text` and `category` members.
    ///
    /// A member that is present but not a JSON string, such as `{"text": 5}`, fails
    /// too. `index` is the zero-based position of the first offending element.
    #[error("Invalid quote format: the quote at position {} needs string \"text\" and \"category\" members", index + 1)]
    Schema {
        /// Zero-based index of the first invalid element.
        index: usize,
    },

    /// Export was requested while the collection is empty.
    #[error("No quotes to export!")]
    NothingToExport,

    /// An import was requested while another one is still being read.
    #[error("An import is already in progress: {path}")]
    ImportInProgress {
        /// Path of the import still being read.
        path: String,
    },

    /// The export file could not be written.
    #[error("Error writing file {path}: {message}")]
    Write {
        /// Destination path.
        path: String,
        /// Description reported by the worker.
        message: String,
    },

    /// Durable or session storage held or produced data that could not be encoded.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// A configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl QuotebookError {
    /// Returns `true` for the errors caused by user input rather than the environment.
    ///
    /// Only the log level depends on this: user errors are logged at `debug`, the
    /// rest at `warn`. The notice shown is the same either way.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Parse(_) | Self::Shape | Self::Schema { .. }
        )
    }
}

/// A specialized `Result` type for Quotebook operations.
pub type Result<T> = std::result::Result<T, QuotebookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_reports_one_based_position() {
        let err = QuotebookError::Schema { index: 0 };
        assert_eq!(
            err.to_string(),
            r#"Invalid quote format: the quote at position 1 needs string "text" and "category" members"#
        );
    }

    #[test]
    fn parse_error_keeps_parser_message() {
        let parser_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = QuotebookError::Parse(parser_err.to_string());
        assert!(err.to_string().starts_with("Error parsing JSON file: "));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn user_errors_are_classified() {
        assert!(QuotebookError::Validation("x".into()).is_user_error());
        assert!(QuotebookError::Shape.is_user_error());
        assert!(!QuotebookError::Storage("x".into()).is_user_error());
        assert!(!QuotebookError::Read {
            path: "a".into(),
            message: "b".into()
        }
        .is_user_error());
    }
}
