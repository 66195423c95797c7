//! Storage layer: durable collection and session memory.
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait shared by durable and session storage
//! - `json`: one-file-per-key backend with atomic writes
//! - `memory`: in-process backend
//! - `store`: [`QuoteStore`], sole owner of the quote collection
//! - `session`: [`SessionCache`], last viewed quote for the running session

pub mod backend;
pub mod json;
pub mod memory;
pub mod session;
pub mod store;

pub use backend::KeyValueStore;
pub use json::{write_atomic, JsonFileStore};
pub use memory::MemoryStore;
pub use session::{SessionCache, LAST_VIEWED_KEY};
pub use store::{LoadSource, QuoteStore, QUOTES_KEY};
