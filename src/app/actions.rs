//! Side effects requested by the event handler.
//!
//! The handler never calls the host directly; it returns a `Vec<Action>` and the
//! plugin shim in `main.rs` performs them in order.

use crate::worker::WorkerMessage;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a file request to the background worker.
    ///
    /// Used for the import read and the export write.
    PostToWorker(WorkerMessage),
}
