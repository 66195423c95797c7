//! Session-scoped memory of the last quote shown.
//!
//! The plugin shim roots the backend in a directory named after the running Zellij
//! server, so the value disappears together with the session.

use crate::domain::error::{QuotebookError, Result};
use crate::domain::Quote;
use crate::storage::backend::KeyValueStore;

/// Session storage key holding the last viewed quote.
pub const LAST_VIEWED_KEY: &str = "lastViewedQuote";

/// Remembers the last quote displayed through the picker path.
pub struct SessionCache {
    backend: Box<dyn KeyValueStore>,
}

impl SessionCache {
    #[must_use]
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Stores `quote` as the last viewed quote, overwriting any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the quote cannot be encoded or the backend write fails.
    pub fn remember(&mut self, quote: &Quote) -> Result<()> {
        let json = serde_json::to_string(quote)
            .map_err(|e| QuotebookError::Storage(format!("failed to serialize quote: {e}")))?;
        self.backend.set(LAST_VIEWED_KEY, &json)?;
        tracing::debug!(category = %quote.category, "last viewed quote remembered");
        Ok(())
    }

    /// Returns the remembered quote, or `None` if nothing was remembered this session.
    ///
    /// Unreadable or malformed values count as nothing remembered.
    #[must_use]
    pub fn recall(&self) -> Option<Quote> {
        let json = match self.backend.get(LAST_VIEWED_KEY) {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!(error = %e, "session storage unreadable");
                return None;
            }
        };

        serde_json::from_str(&json)
            .map_err(|e| tracing::warn!(error = %e, "ignoring malformed last viewed quote"))
            .ok()
    }

    /// Forgets the remembered quote, as if the session had ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot delete the value.
    pub fn clear(&mut self) -> Result<()> {
        self.backend.remove(LAST_VIEWED_KEY)
    }
}

impl std::fmt::Debug for SessionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCache").finish_non_exhaustive()
    }
}
