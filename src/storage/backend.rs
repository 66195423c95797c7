//! Key-value storage abstraction.
//!
//! Durable storage and session storage have the same shape: a handful of string keys,
//! each holding a JSON document. [`KeyValueStore`] captures that shape so
//! [`QuoteStore`](crate::storage::QuoteStore) and
//! [`SessionCache`](crate::storage::SessionCache) are independent of where the bytes
//! live.
//!
//! # Implementations
//!
//! - [`JsonFileStore`](crate::storage::JsonFileStore): one file per key, atomic writes
//! - [`MemoryStore`](crate::storage::MemoryStore): process memory, used for tests and
//!   as a fallback when a directory cannot be created

use crate::domain::error::Result;

/// Abstraction over string key-value backends.
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, or `Ok(None)` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. A failed write leaves the previous value
    /// in place.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot delete the value.
    fn remove(&mut self, key: &str) -> Result<()>;
}
