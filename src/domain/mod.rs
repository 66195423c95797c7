//! Domain layer for the Quotebook plugin.
//!
//! Core types with no dependency on the plugin host or on storage.
//!
//! - [`error`]: Error taxonomy and result alias
//! - [`quote`]: The quote record, input validation, and the default collection

pub mod error;
pub mod quote;

pub use error::{QuotebookError, Result};
pub use quote::{default_quotes, Quote, MISSING_FIELDS_MESSAGE};
