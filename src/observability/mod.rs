//! Span export to a local OTLP/JSON file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileSpanExporter → quotebook-otlp.json
//! ```
//!
//! The file lives in the plugin data directory and rotates at 10 MiB, keeping three
//! timestamped backups. The filter comes from the `trace_level` plugin option
//! (default `info`).
//!
//! - [`init_tracing`]: installs the subscriber, call once from `load`
//! - [`create_tracer_provider`]: the underlying provider, for custom setups

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::{RotatingFileWriter, RotationPolicy};
pub use init::init_tracing;
pub use tracer::create_tracer_provider;
