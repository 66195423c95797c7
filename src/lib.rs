//! Quotebook: a Zellij plugin that keeps a collection of categorized quotes.
//!
//! - Shows a random quote on demand and remembers it for the session
//! - Adds quotes through a two-field form
//! - Exports the collection to a JSON file and imports quotes from one
//! - Persists the collection in the plugin data directory, seeded with defaults

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Key mapping, event handling                      │
//! │  - Form, transfer, notices                          │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - View model  │   │ - Collection  │   │ - Import read │
//! │ - Components  │   │ - Session     │   │ - Export write│
//! │ - Theming     │   │ - Backends    │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/quotebook.wasm" {
//!         theme "catppuccin-latte"
//!         export_dir "~/Documents"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Library usage
//!
//! The host-independent core can be driven directly:
//!
//! ```rust
//! use quotebook::storage::MemoryStore;
//! use quotebook::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(
//!     &config,
//!     Box::new(MemoryStore::new()),
//!     Box::new(MemoryStore::new()),
//! );
//!
//! let (render, actions) = handle_event(&mut state, &Event::Bootstrap)?;
//! assert!(render && actions.is_empty());
//! assert_eq!(state.store.len(), 8);
//! # Ok::<(), quotebook::QuotebookError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, map_key, Action, AppState, Event, InputMode};
pub use domain::{Quote, QuotebookError, Result};
pub use ui::Theme;

use app::picker::Picker;
use infrastructure::{expand_tilde, get_data_dir, get_session_root, HOST_ROOT};
use std::collections::BTreeMap;
use std::path::PathBuf;
use storage::{KeyValueStore, QuoteStore, SessionCache};
use ui::theme::DEFAULT_THEME;

/// Plugin configuration parsed from the KDL plugin block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory of the durable collection and the trace file.
    pub data_dir: PathBuf,

    /// Parent of the per-session cache directories.
    pub session_root: PathBuf,

    /// Directory the export file is written to. Default: the host root.
    pub export_dir: PathBuf,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: String,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: get_data_dir(),
            session_root: get_session_root(),
            export_dir: PathBuf::from(HOST_ROOT),
            theme_name: DEFAULT_THEME.to_string(),
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses the configuration map handed to `load`.
    ///
    /// Recognized keys: `data_dir`, `session_root`, `export_dir`, `theme`,
    /// `theme_file`, `trace_level`. Directory values may start with `~`. Unknown
    /// keys are ignored and blank values keep the default.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::path::PathBuf;
    /// use quotebook::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("export_dir".to_string(), "~/Documents".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.export_dir, PathBuf::from("/host/Documents"));
    /// assert_eq!(config.theme_name, "catppuccin-latte");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };
        let dir = |key: &str, default: PathBuf| {
            value(key).map_or(default, |v| PathBuf::from(expand_tilde(v)))
        };

        Self {
            data_dir: dir("data_dir", defaults.data_dir),
            session_root: dir("session_root", defaults.session_root),
            export_dir: dir("export_dir", defaults.export_dir),
            theme_name: value("theme").map_or(defaults.theme_name, String::from),
            theme_file: value("theme_file").map(expand_tilde),
            trace_level: value("trace_level").map_or(defaults.trace_level, String::from),
        }
    }

    /// Resolves the theme: `theme_file` first, then `theme_name`, then the default.
    fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            match Theme::from_file(theme_file) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, trying name");
                }
            }
        }

        Theme::from_name(&self.theme_name).unwrap_or_else(|e| {
            tracing::debug!(theme_name = %self.theme_name, error = %e, "failed to load theme, using default");
            Theme::default()
        })
    }
}

/// Builds the application state over the given backends.
///
/// Nothing is read from the backends here; the collection loads when
/// [`Event::Bootstrap`] is handled.
#[must_use]
pub fn initialize(
    config: &Config,
    durable: Box<dyn KeyValueStore>,
    session: Box<dyn KeyValueStore>,
) -> AppState {
    tracing::debug!(export_dir = %config.export_dir.display(), "initializing quotebook");

    AppState::new(
        QuoteStore::new(durable),
        SessionCache::new(session),
        Picker::from_entropy(),
        config.load_theme(),
        config.export_dir.clone(),
    )
}
