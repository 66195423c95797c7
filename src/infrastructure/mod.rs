//! Infrastructure layer for filesystem and environment interactions.
//!
//! Path handling for the Zellij sandbox, plus construction of the two storage
//! backends from configuration.

pub mod paths;

pub use paths::{
    expand_tilde, get_data_dir, get_session_root, resolve_user_path, session_dir,
    strip_host_prefix, HOST_ROOT,
};

use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use crate::Config;

/// Opens the durable and session backends.
///
/// The durable backend lives in `config.data_dir`; the session backend lives in a
/// directory keyed by `session_id` under `config.session_root`. A backend whose
/// directory cannot be created falls back to an in-memory store, so the plugin keeps
/// working for the lifetime of the pane.
#[must_use]
pub fn open_backends(
    config: &Config,
    session_id: u32,
) -> (Box<dyn KeyValueStore>, Box<dyn KeyValueStore>) {
    let durable = open_or_memory(config.data_dir.clone(), "durable");
    let session = open_or_memory(session_dir(&config.session_root, session_id), "session");
    (durable, session)
}

fn open_or_memory(dir: std::path::PathBuf, role: &str) -> Box<dyn KeyValueStore> {
    match JsonFileStore::open(&dir) {
        Ok(store) => {
            tracing::debug!(role = role, dir = %dir.display(), "storage opened");
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!(
                role = role,
                dir = %dir.display(),
                error = %e,
                "storage unavailable, keeping data in memory"
            );
            Box::new(MemoryStore::new())
        }
    }
}
