//! The quote collection and its durable persistence.
//!
//! [`QuoteStore`] is the only owner of the collection. Everything else reads it
//! through [`QuoteStore::quotes`] and changes it only through
//! [`QuoteStore::commit`], which appends and persists as one step.

use crate::domain::error::{QuotebookError, Result};
use crate::domain::{default_quotes, Quote};
use crate::storage::backend::KeyValueStore;

/// Durable storage key holding the whole collection.
pub const QUOTES_KEY: &str = "quotes";

/// How [`QuoteStore::load`] populated the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// A persisted collection was found and parsed.
    Persisted,
    /// Nothing usable was persisted; the default collection was assigned.
    Seeded,
}

/// Owns the in-memory collection and mirrors it to durable storage on demand.
pub struct QuoteStore {
    quotes: Vec<Quote>,
    backend: Box<dyn KeyValueStore>,
}

impl QuoteStore {
    /// Creates an empty store over `backend`. Call [`load`](Self::load) before use.
    #[must_use]
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self {
            quotes: Vec::new(),
            backend,
        }
    }

    /// Populates the collection from durable storage.
    ///
    /// When the key is absent the default collection is assigned and persisted
    /// straight away. A value that is present but unreadable or not a list of quotes
    /// is treated the same way, after a warning.
    ///
    /// The collection is always populated when this returns, even on error.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the freshly seeded defaults fails.
    pub fn load(&mut self) -> Result<LoadSource> {
        let _span = tracing::debug_span!("store_load").entered();

        let persisted = match self.backend.get(QUOTES_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "durable storage unreadable, seeding defaults");
                None
            }
        };

        if let Some(json) = persisted {
            match serde_json::from_str::<Vec<Quote>>(&json) {
                Ok(quotes) => {
                    tracing::debug!(count = quotes.len(), "loaded persisted quotes");
                    self.quotes = quotes;
                    return Ok(LoadSource::Persisted);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "persisted quotes are corrupt, seeding defaults");
                }
            }
        }

        self.quotes = default_quotes();
        tracing::debug!(count = self.quotes.len(), "seeded default quotes");
        self.save()?;
        Ok(LoadSource::Seeded)
    }

    /// Writes the whole collection to durable storage, replacing the prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.quotes)
            .map_err(|e| QuotebookError::Storage(format!("failed to serialize quotes: {e}")))?;
        self.backend.set(QUOTES_KEY, &json)?;
        tracing::debug!(count = self.quotes.len(), "quotes saved");
        Ok(())
    }

    /// Appends `quotes` in order and saves the collection.
    ///
    /// If the save fails the appended quotes are dropped again, so the in-memory
    /// collection never holds anything durable storage rejected. Returns the number
    /// of quotes appended.
    ///
    /// # Errors
    ///
    /// Returns the save error; the collection is then unchanged.
    pub fn commit(&mut self, quotes: impl IntoIterator<Item = Quote>) -> Result<usize> {
        let before = self.quotes.len();
        self.quotes.extend(quotes);

        if let Err(e) = self.save() {
            self.quotes.truncate(before);
            return Err(e);
        }
        Ok(self.quotes.len() - before)
    }

    /// The current collection, in insertion order.
    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of quotes in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Read access to the durable backend.
    #[must_use]
    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }
}

impl std::fmt::Debug for QuoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteStore")
            .field("quotes", &self.quotes.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::storage::{JsonFileStore, MemoryStore};

    /// Backend whose writes always fail.
    #[derive(Debug, Default)]
    pub(crate) struct ReadOnlyStore {
        pub(crate) value: Option<String>,
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(self.value.clone())
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
        fn remove(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    fn persisted(store: &QuoteStore) -> Vec<Quote> {
        let json = store.backend().get(QUOTES_KEY).unwrap().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn load_seeds_and_persists_defaults_when_absent() {
        let mut store = QuoteStore::new(Box::new(MemoryStore::new()));

        assert_eq!(store.load().unwrap(), LoadSource::Seeded);

        assert_eq!(store.quotes(), default_quotes().as_slice());
        assert_eq!(persisted(&store), default_quotes());
    }

    #[test]
    fn load_prefers_persisted_collection() {
        let mut backend = MemoryStore::new();
        backend
            .set(QUOTES_KEY, r#"[{"text":"Only one","category":"Solo"}]"#)
            .unwrap();
        let mut store = QuoteStore::new(Box::new(backend));

        assert_eq!(store.load().unwrap(), LoadSource::Persisted);
        assert_eq!(store.quotes(), &[Quote::new("Only one", "Solo")]);
    }

    #[test]
    fn load_keeps_an_empty_persisted_collection() {
        let mut backend = MemoryStore::new();
        backend.set(QUOTES_KEY, "[]").unwrap();
        let mut store = QuoteStore::new(Box::new(backend));

        assert_eq!(store.load().unwrap(), LoadSource::Persisted);
        assert!(store.is_empty());
    }

    #[test]
    fn load_reseeds_corrupt_data() {
        let mut backend = MemoryStore::new();
        backend.set(QUOTES_KEY, "{not json").unwrap();
        let mut store = QuoteStore::new(Box::new(backend));

        assert_eq!(store.load().unwrap(), LoadSource::Seeded);
        assert_eq!(store.len(), 8);
        assert_eq!(persisted(&store).len(), 8);
    }

    #[test]
    fn load_populates_memory_even_when_seed_cannot_be_saved() {
        let mut store = QuoteStore::new(Box::new(ReadOnlyStore::default()));

        assert!(store.load().is_err());
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn commit_appends_and_persists() {
        let mut store = QuoteStore::new(Box::new(MemoryStore::new()));
        store.load().unwrap();

        assert_eq!(store.commit([Quote::new("New", "Fresh")]).unwrap(), 1);

        assert_eq!(store.len(), 9);
        assert_eq!(persisted(&store).len(), 9);
        assert_eq!(persisted(&store).last(), Some(&Quote::new("New", "Fresh")));
    }

    #[test]
    fn commit_preserves_order_and_duplicates() {
        let mut store = QuoteStore::new(Box::new(MemoryStore::new()));
        let batch = vec![
            Quote::new("a", "x"),
            Quote::new("b", "y"),
            Quote::new("a", "x"),
        ];

        assert_eq!(store.commit(batch.clone()).unwrap(), 3);

        assert_eq!(store.quotes(), batch.as_slice());
        assert_eq!(persisted(&store), batch);
    }

    #[test]
    fn failed_commit_leaves_collection_unchanged() {
        let mut store = QuoteStore::new(Box::new(ReadOnlyStore::default()));
        let _ = store.load();
        let before = store.quotes().to_vec();

        assert!(store.commit([Quote::new("x", "y")]).is_err());
        assert!(store.commit([Quote::new("x", "y")]).is_err());

        assert_eq!(store.quotes(), before.as_slice());
    }

    #[test]
    fn collection_survives_reopening_file_store() {
        let dir = tempfile::tempdir().unwrap();

        let mut first = QuoteStore::new(Box::new(JsonFileStore::open(dir.path()).unwrap()));
        first.load().unwrap();
        first.commit([Quote::new("Persist me", "Durable")]).unwrap();
        drop(first);

        let mut second = QuoteStore::new(Box::new(JsonFileStore::open(dir.path()).unwrap()));
        assert_eq!(second.load().unwrap(), LoadSource::Persisted);
        assert_eq!(second.len(), 9);
        assert_eq!(second.quotes()[8], Quote::new("Persist me", "Durable"));
    }
}
