//! The add-quote form.
//!
//! The input surface is built once by [`QuoteForm::ensure_initialized`]; later calls
//! leave the existing surface (and whatever the user typed) untouched.

use crate::domain::error::Result;
use crate::domain::Quote;
use crate::storage::QuoteStore;

/// Message shown after a successful submission.
pub const QUOTE_ADDED_MESSAGE: &str = "Quote added successfully!";

/// Which input field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Text,
    Category,
}

impl FormField {
    /// The other field.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Text => Self::Category,
            Self::Category => Self::Text,
        }
    }
}

/// Field contents of a constructed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSurface {
    pub text: String,
    pub category: String,
    pub focus: FormField,
}

impl FormSurface {
    fn new() -> Self {
        Self {
            text: String::new(),
            category: String::new(),
            focus: FormField::Text,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Text => &mut self.text,
            FormField::Category => &mut self.category,
        }
    }
}

/// Collects a text/category pair and appends it to the store.
#[derive(Debug, Clone, Default)]
pub struct QuoteForm {
    surface: Option<FormSurface>,
}

impl QuoteForm {
    #[must_use]
    pub const fn new() -> Self {
        Self { surface: None }
    }

    /// Builds the input surface if it does not exist yet.
    ///
    /// Returns `true` if this call created it.
    pub fn ensure_initialized(&mut self) -> bool {
        if self.surface.is_some() {
            return false;
        }
        tracing::debug!("building quote form");
        self.surface = Some(FormSurface::new());
        true
    }

    #[must_use]
    pub const fn surface(&self) -> Option<&FormSurface> {
        self.surface.as_ref()
    }

    /// Moves input focus to `field`.
    pub fn set_focus(&mut self, field: FormField) {
        if let Some(surface) = self.surface.as_mut() {
            surface.focus = field;
        }
    }

    /// Moves input focus to the other field.
    pub fn toggle_field(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.focus = surface.focus.next();
        }
    }

    /// Types a character into the focused field.
    pub fn push_char(&mut self, c: char) {
        if let Some(surface) = self.surface.as_mut() {
            surface.focused_mut().push(c);
        }
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.focused_mut().pop();
        }
    }

    /// Validates the fields and appends the new quote to `store`.
    ///
    /// On success the quote is appended and saved, both fields are cleared, and
    /// focus returns to the text field. On a validation failure nothing changes.
    ///
    /// # Errors
    ///
    /// - [`Validation`](crate::QuotebookError::Validation) if either trimmed field is empty
    /// - a storage error if the save fails; the collection is left as it was and the
    ///   fields keep their contents so the user can retry
    pub fn submit(&mut self, store: &mut QuoteStore) -> Result<Quote> {
        let (text, category) = self
            .surface
            .as_ref()
            .map_or(("", ""), |s| (s.text.as_str(), s.category.as_str()));

        let quote = Quote::from_input(text, category)?;

        store.commit([quote.clone()])?;

        if let Some(surface) = self.surface.as_mut() {
            surface.text.clear();
            surface.category.clear();
            surface.focus = FormField::Text;
        }

        tracing::debug!(category = %quote.category, total = store.len(), "quote added");
        Ok(quote)
    }
}
