//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain, storage and worker
//! layers:
//!
//! ```text
//! Key / Worker response → Event → handle_event → AppState mutations → Actions
//!                                      ↑                                  │
//!                                      └─────── WorkerResponse ◄──────────┘
//! ```
//!
//! - [`picker`]: uniform random selection
//! - [`form`]: the add-quote form
//! - [`transfer`]: JSON export and import
//! - [`state`]: the state container and view model computation
//! - [`handler`]: event processing
//! - [`keys`]: key to event mapping
//! - [`notice`], [`modes`], [`actions`]: supporting types

pub mod actions;
pub mod form;
pub mod handler;
pub mod keys;
pub mod modes;
pub mod notice;
pub mod picker;
pub mod state;
pub mod transfer;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keys::map_key;
pub use modes::InputMode;
pub use notice::{Notice, NoticeKind};
pub use state::AppState;
