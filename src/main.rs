//! Zellij plugin wrapper and entry point.
//!
//! Everything that touches the host API lives here: permission and event
//! subscription, translating host events into [`Event`]s, executing the returned
//! [`Action`]s, and the worker binding.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  QuotebookWorker │   │  ← Import reads, export writes
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Load**: parse config, start tracing, request permissions, subscribe
//! 2. **Permission result**: open the storage backends and bootstrap
//! 3. **Update**: keys and worker responses go through `handle_event`
//! 4. **Render**: delegate to the library renderer

#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Once;
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, post_message_to_plugin};

use quotebook::infrastructure::open_backends;
use quotebook::storage::MemoryStore;
use quotebook::worker::{QuotebookWorker, WorkerMessage, WorkerResponse};
use quotebook::{handle_event, initialize, map_key, Action, AppState, Config, Event};

register_plugin!(State);
register_worker!(WorkerShim, quotebook_worker, QUOTEBOOK_WORKER);

const WORKER_NAME: &str = "quotebook";

/// Plugin state wrapper.
struct State {
    app: AppState,
    config: Config,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: in_memory_app(&config),
            config,
        }
    }
}

fn in_memory_app(config: &Config) -> AppState {
    initialize(
        config,
        Box::new(MemoryStore::new()),
        Box::new(MemoryStore::new()),
    )
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        self.config = Config::from_zellij(&configuration);
        quotebook::observability::init_tracing(&self.config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?self.config, "parsed configuration");
        self.app = in_memory_app(&self.config);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"));
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match map_key(&self.app, key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                self.handle_permission_result(status)
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        quotebook::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(name, _) => format!("CustomMessage({name})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Swaps in the on-disk backends once the host grants filesystem access.
    ///
    /// On denial the in-memory state from `load` is kept, so the collection lives
    /// only as long as the pane.
    fn handle_permission_result(&mut self, status: PermissionStatus) -> Event {
        match status {
            PermissionStatus::Granted => {
                let session_id = get_plugin_ids().zellij_pid;
                tracing::debug!(session_id = session_id, "permissions granted - opening storage");
                let (durable, session) = open_backends(&self.config, session_id);
                self.app = initialize(&self.config, durable, session);
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - quotes will not be saved");
            }
        }
        Event::Bootstrap
    }

    fn map_custom_message(name: &str, payload: &str) -> Option<Event> {
        if name != WORKER_NAME {
            tracing::debug!(message_name = %name, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: WORKER_NAME.to_string(),
                    payload,
                });
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize worker message"),
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(message) => Self::post_worker_message(message),
        }
    }
}

static WORKER_TRACING: Once = Once::new();

/// Binds [`QuotebookWorker`] to the Zellij worker interface.
#[derive(Default, Serialize, Deserialize)]
struct WorkerShim(QuotebookWorker);

impl ZellijWorker<'_> for WorkerShim {
    fn on_message(&mut self, message: String, payload: String) {
        WORKER_TRACING.call_once(|| quotebook::observability::init_tracing(&Config::default()));

        let Some(response) = self.0.handle_payload(&payload) else {
            return;
        };
        post_message_to_plugin(PluginMessage {
            name: message,
            payload: response,
            worker_name: None,
        });
    }
}
