//! Quote domain model.
//!
//! A [`Quote`] is the atomic unit of data: a short text and the category it belongs
//! to. Quotes carry no identifier; the collection refers to them by position only.

use crate::domain::error::{QuotebookError, Result};
use serde::{Deserialize, Serialize};

/// Message shown when a form submission is missing either field.
pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both a quote and a category!";

/// A quote and its category label.
///
/// Serialized as `{"text": "...", "category": "..."}`, which is both the durable
/// storage format and the export/import file format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    /// Builds a quote from raw user input.
    ///
    /// Both values are trimmed; if either is empty afterwards the input is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`QuotebookError::Validation`] when the trimmed text or category is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use quotebook::Quote;
    ///
    /// let quote = Quote::from_input("  Stay hungry. ", " Life ").unwrap();
    /// assert_eq!(quote.text, "Stay hungry.");
    /// assert_eq!(quote.category, "Life");
    ///
    /// assert!(Quote::from_input("   ", "Life").is_err());
    /// ```
    pub fn from_input(text: &str, category: &str) -> Result<Self> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() || category.is_empty() {
            return Err(QuotebookError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        Ok(Self::new(text, category))
    }

    /// Creates a quote without validation.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// The collection used when durable storage holds nothing yet.
#[must_use]
pub fn default_quotes() -> Vec<Quote> {
    [
        ("The only way to do great work is to love what you do.", "Inspiration"),
        ("Innovation distinguishes between a leader and a follower.", "Leadership"),
        ("Life is what happens when you're busy making other plans.", "Life"),
        ("The future belongs to those who believe in the beauty of their dreams.", "Dreams"),
        (
            "Success is not final, failure is not fatal: it is the courage to continue that counts.",
            "Success",
        ),
        ("Believe you can and you're halfway there.", "Motivation"),
        ("The only impossible journey is the one you never begin.", "Journey"),
        ("In the middle of difficulty lies opportunity.", "Wisdom"),
    ]
    .into_iter()
    .map(|(text, category)| Quote::new(text, category))
    .collect()
}
