//! Worker-side processing of file I/O requests.
//!
//! [`QuotebookWorker`] holds no state; it performs the blocking filesystem call named
//! by each [`WorkerMessage`] and answers with a [`WorkerResponse`]. The Zellij worker
//! binding that receives and posts the serialized messages lives in the plugin shim.

use crate::storage::write_atomic;
use crate::worker::{TraceContext, WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Worker thread state.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuotebookWorker;

impl QuotebookWorker {
    /// Reads `path` as text.
    fn handle_read_file(path: String) -> WorkerResponse {
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path, bytes = contents.len(), "import file read");
                WorkerResponse::FileRead { path, contents }
            }
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "import file read failed");
                WorkerResponse::FileReadFailed {
                    path,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Writes `contents` to `path`, creating the parent directory if needed.
    fn handle_write_file(path: String, contents: &str) -> WorkerResponse {
        let target = Path::new(&path);
        let result = target
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or(Ok(()), std::fs::create_dir_all)
            .and_then(|()| write_atomic(target, contents));

        match result {
            Ok(()) => {
                tracing::debug!(path = %path, bytes = contents.len(), "export file written");
                WorkerResponse::FileWritten {
                    path,
                    bytes: contents.len(),
                }
            }
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "export file write failed");
                WorkerResponse::FileWriteFailed {
                    path,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Re-enters the sender's trace so worker spans become its children.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(
        trace_context: Option<&TraceContext>,
    ) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = trace_context?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Processes one request and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(message.trace_context());

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::ReadFile { path, .. } => Self::handle_read_file(path),
            WorkerMessage::WriteFile { path, contents, .. } => {
                Self::handle_write_file(path, &contents)
            }
        }
    }

    /// Decodes a serialized request, processes it, and encodes the response.
    ///
    /// Returns `None` only if the response itself cannot be serialized.
    pub fn handle_payload(&mut self, payload: &str) -> Option<String> {
        let response = match serde_json::from_str::<WorkerMessage>(payload) {
            Ok(message) => self.handle_message(message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: format!("unreadable worker request: {e}"),
                }
            }
        };

        serde_json::to_string(&response)
            .map_err(|e| tracing::debug!(error = %e, "failed to serialize worker response"))
            .ok()
    }
}
