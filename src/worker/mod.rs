//! Background worker for file I/O.
//!
//! Import reads and export writes run on the Zellij worker thread so the plugin
//! keeps handling keys while the filesystem call is in flight.
//!
//! - `messages`: Request/response protocol with trace context propagation
//! - `handler`: Request processing

pub mod handler;
pub mod messages;

pub use handler::QuotebookWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
