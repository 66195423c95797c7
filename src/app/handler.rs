//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for user input, startup and worker
//! responses. It mutates [`AppState`] and returns whether to re-render plus the
//! side effects the plugin runtime must perform.
//!
//! Failures of the operation an event triggers are reported to the user as notices
//! and do not surface as `Err`.

use super::form::QUOTE_ADDED_MESSAGE;
use super::modes::InputMode;
use super::notice::Notice;
use crate::app::{Action, AppState};
use crate::domain::error::{QuotebookError, Result};
use crate::infrastructure::{resolve_user_path, strip_host_prefix};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, startup, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Loads the collection, builds the form and transfer controls, and shows the
    /// first quote. Only the first occurrence has an effect.
    Bootstrap,

    /// Displays a new random quote.
    ShowNewQuote,
    /// Builds the form if needed and gives it keyboard focus.
    FocusForm,
    /// Builds the transfer controls if needed and focuses the import chooser.
    FocusImport,
    /// Exports the collection.
    Export,
    /// Hides the plugin pane.
    CloseFocus,

    /// Types a character into the focused input.
    Char(char),
    /// Deletes the last character of the focused input.
    Backspace,
    /// Switches between the form fields.
    Tab,
    /// Submits the focused input: adds the quote, or starts the import.
    Submit,
    /// Leaves the focused input.
    Escape,

    /// Acknowledges the notice currently shown.
    DismissNotice,

    /// Wraps a response from the background worker.
    WorkerResponse(WorkerResponse),
}

impl Event {
    /// Whether this event comes from the keyboard.
    ///
    /// Keyboard events are swallowed while a notice is shown, except the dismissal.
    #[must_use]
    pub const fn is_user_input(&self) -> bool {
        !matches!(
            self,
            Self::Bootstrap | Self::DismissNotice | Self::WorkerResponse(_)
        )
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Errors
///
/// Currently infallible; the `Result` lets the plugin runtime treat handler
/// failures uniformly.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if event.is_user_input() && state.notice().is_some() {
        tracing::debug!("notice shown, ignoring input");
        return Ok((false, vec![]));
    }

    match event {
        Event::Bootstrap => Ok((bootstrap(state), vec![])),
        Event::ShowNewQuote => {
            state.show_new_quote();
            Ok((true, vec![]))
        }
        Event::FocusForm => {
            state.form.ensure_initialized();
            state.input_mode = InputMode::Form;
            Ok((true, vec![]))
        }
        Event::FocusImport => {
            state.transfer.ensure_initialized();
            state.input_mode = InputMode::ImportPath;
            Ok((true, vec![]))
        }
        Event::Export => Ok((true, export(state))),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Char(c) => match state.input_mode {
            InputMode::Form => {
                state.form.push_char(*c);
                Ok((true, vec![]))
            }
            InputMode::ImportPath => {
                state.transfer.push_char(*c);
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Form => {
                state.form.backspace();
                Ok((true, vec![]))
            }
            InputMode::ImportPath => {
                state.transfer.backspace();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Tab => {
            if state.input_mode != InputMode::Form {
                return Ok((false, vec![]));
            }
            state.form.toggle_field();
            Ok((true, vec![]))
        }
        Event::Submit => match state.input_mode {
            InputMode::Form => {
                submit_form(state);
                Ok((true, vec![]))
            }
            InputMode::ImportPath => Ok((true, begin_import(state))),
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => match state.input_mode {
            InputMode::Form => {
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::ImportPath => {
                state.transfer.reset_chooser();
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::DismissNotice => Ok((state.notices.pop_front().is_some(), vec![])),
        Event::WorkerResponse(response) => Ok((handle_worker_response(state, response), vec![])),
    }
}

/// Startup sequence. Returns whether anything changed.
fn bootstrap(state: &mut AppState) -> bool {
    if state.bootstrapped {
        tracing::debug!("already bootstrapped");
        return false;
    }

    match state.store.load() {
        Ok(source) => {
            tracing::debug!(source = ?source, count = state.store.len(), "collection loaded");
        }
        Err(e) => state.report(&e),
    }

    state.form.ensure_initialized();
    state.transfer.ensure_initialized();
    state.restore_or_pick();
    state.bootstrapped = true;
    true
}

fn submit_form(state: &mut AppState) {
    match state.form.submit(&mut state.store) {
        Ok(_) => {
            state.notify(Notice::success(QUOTE_ADDED_MESSAGE));
            state.show_new_quote();
        }
        Err(e) => state.report(&e),
    }
}

fn export(state: &mut AppState) -> Vec<Action> {
    state.transfer.ensure_initialized();

    match state.transfer.export(&state.store) {
        Ok(file) => {
            let path = file.path.to_string_lossy().into_owned();
            tracing::debug!(path = %path, count = file.count, "export requested");
            state.status = Some(format!(
                "Exporting {} quotes to {}...",
                file.count,
                strip_host_prefix(&path)
            ));
            vec![Action::PostToWorker(WorkerMessage::write_file(
                path,
                file.contents,
            ))]
        }
        Err(e) => {
            state.report(&e);
            vec![]
        }
    }
}

fn begin_import(state: &mut AppState) -> Vec<Action> {
    match state.transfer.begin_import(resolve_user_path) {
        Ok(path) => {
            state.input_mode = InputMode::Normal;
            state.status = Some(format!("Reading {}...", strip_host_prefix(&path)));
            vec![Action::PostToWorker(WorkerMessage::read_file(path))]
        }
        Err(e) => {
            state.report(&e);
            vec![]
        }
    }
}

/// Applies a worker response. Returns whether anything changed.
fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> bool {
    match response {
        WorkerResponse::FileRead { path, contents } => {
            finish_import(state, path, Ok(contents.clone()))
        }
        WorkerResponse::FileReadFailed { path, message } => {
            finish_import(state, path, Err(message.clone()))
        }
        WorkerResponse::FileWritten { path, bytes } => {
            tracing::debug!(path = %path, bytes = bytes, "export written");
            state.status = Some(format!("Exported to {}", strip_host_prefix(path)));
            true
        }
        WorkerResponse::FileWriteFailed { path, message } => {
            state.status = None;
            state.report(&QuotebookError::Write {
                path: path.clone(),
                message: message.clone(),
            });
            true
        }
        WorkerResponse::Error { message } => {
            state.report(&QuotebookError::Worker(message.clone()));
            true
        }
    }
}

fn finish_import(
    state: &mut AppState,
    path: &str,
    read: std::result::Result<String, String>,
) -> bool {
    if !state.transfer.is_awaiting(path) {
        tracing::debug!(path = %path, "ignoring read result nobody is waiting for");
        return false;
    }

    state.status = None;
    match state.transfer.complete_import(read, &mut state.store) {
        Ok(count) => {
            state.notify(Notice::success(format!(
                "Successfully imported {count} quotes!"
            )));
            state.show_new_quote();
        }
        Err(e) => state.report(&e),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notice::NoticeKind;
    use crate::app::picker::Picker;
    use crate::app::transfer::ImportState;
    use crate::domain::{default_quotes, Quote};
    use crate::storage::{
        JsonFileStore, KeyValueStore, MemoryStore, QuoteStore, SessionCache, QUOTES_KEY,
    };
    use crate::ui::presenter::{self, DisplaySurface};
    use crate::ui::theme::Theme;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn state_with(durable: Box<dyn KeyValueStore>, session: Box<dyn KeyValueStore>) -> AppState {
        AppState::new(
            QuoteStore::new(durable),
            SessionCache::new(session),
            Picker::seeded(11),
            Theme::default(),
            PathBuf::from("/host"),
        )
    }

    fn booted() -> AppState {
        let mut state = state_with(Box::new(MemoryStore::new()), Box::new(MemoryStore::new()));
        handle_event(&mut state, &Event::Bootstrap).unwrap();
        state
    }

    fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
        events
            .iter()
            .flat_map(|event| handle_event(state, event).unwrap().1)
            .collect()
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn persisted(state: &AppState) -> Vec<Quote> {
        let json = state.store.backend().get(QUOTES_KEY).unwrap().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn bootstrap_seeds_and_shows_a_quote() {
        let state = booted();

        assert_eq!(state.store.len(), 8);
        assert!(state.form.surface().is_some());
        assert!(state.transfer.surface().is_some());
        assert!(matches!(state.display, DisplaySurface::Quote { .. }));
        let remembered = state.session.recall().unwrap();
        assert_eq!(state.display, presenter::render(Some(&remembered)));
    }

    #[test]
    fn bootstrap_runs_once() {
        let mut state = booted();
        state.store.commit([Quote::new("extra", "x")]).unwrap();

        let (render, _) = handle_event(&mut state, &Event::Bootstrap).unwrap();

        assert!(!render);
        assert_eq!(state.store.len(), 9);
    }

    #[test]
    fn bootstrap_restores_the_session_quote() {
        let mut session = MemoryStore::new();
        let remembered = Quote::new("Remembered", "Session");
        session
            .set(
                crate::storage::LAST_VIEWED_KEY,
                &serde_json::to_string(&remembered).unwrap(),
            )
            .unwrap();
        let mut state = state_with(Box::new(MemoryStore::new()), Box::new(session));

        handle_event(&mut state, &Event::Bootstrap).unwrap();

        assert_eq!(state.display, presenter::render(Some(&remembered)));
    }

    #[test]
    fn after_session_end_a_new_quote_is_picked_and_remembered() {
        let mut state = booted();
        state.session.clear().unwrap();
        assert_eq!(state.session.recall(), None);

        state.restore_or_pick();

        assert!(state.session.recall().is_some());
    }

    #[test]
    fn adding_a_quote_end_to_end() {
        let temp = TempDir::new().unwrap();
        let durable = JsonFileStore::open(temp.path().join("data")).unwrap();
        let mut state = state_with(Box::new(durable), Box::new(MemoryStore::new()));

        handle_event(&mut state, &Event::Bootstrap).unwrap();
        assert_eq!(state.store.len(), 8);
        assert!(state
            .store
            .quotes()
            .iter()
            .any(|q| q.category == "Wisdom"));

        send(&mut state, &[Event::FocusForm]);
        type_text(&mut state, "Test quote");
        send(&mut state, &[Event::Tab]);
        type_text(&mut state, "TestCat");
        send(&mut state, &[Event::Submit]);

        assert_eq!(state.store.len(), 9);
        assert_eq!(
            state.store.quotes().last(),
            Some(&Quote::new("Test quote", "TestCat"))
        );
        assert_eq!(persisted(&state).len(), 9);
        assert_eq!(state.notice(), Some(&Notice::success(QUOTE_ADDED_MESSAGE)));
        assert_eq!(state.input_mode, InputMode::Form);

        let reopened = JsonFileStore::open(temp.path().join("data")).unwrap();
        let mut store = QuoteStore::new(Box::new(reopened));
        store.load().unwrap();
        assert_eq!(store.len(), 9);
    }

    #[test]
    fn invalid_submission_shows_validation_notice() {
        let mut state = booted();
        send(&mut state, &[Event::FocusForm]);
        type_text(&mut state, "No category");
        send(&mut state, &[Event::Submit]);

        assert_eq!(state.store.len(), 8);
        let notice = state.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Please enter both a quote and a category!");
    }

    #[test]
    fn input_is_ignored_until_notice_is_dismissed() {
        let mut state = booted();
        state.notify(Notice::info("hello"));
        let before = state.display.clone();

        let (render, _) = handle_event(&mut state, &Event::ShowNewQuote).unwrap();
        assert!(!render);
        assert_eq!(state.display, before);

        let (render, _) = handle_event(&mut state, &Event::DismissNotice).unwrap();
        assert!(render);
        assert!(state.notice().is_none());
    }

    #[test]
    fn export_posts_write_request() {
        let mut state = booted();

        let actions = send(&mut state, &[Event::Export]);

        let [Action::PostToWorker(WorkerMessage::WriteFile { path, contents, .. })] =
            actions.as_slice()
        else {
            panic!("expected one write request, got {actions:?}");
        };
        assert_eq!(path, "/host/quotes.json");
        let exported: Vec<Quote> = serde_json::from_str(contents).unwrap();
        assert_eq!(exported, state.store.quotes());
    }

    #[test]
    fn export_of_empty_collection_only_notifies() {
        let mut state = booted();
        state.store = QuoteStore::new(Box::new(MemoryStore::new()));

        let actions = send(&mut state, &[Event::Export]);

        assert!(actions.is_empty());
        assert_eq!(state.notice(), Some(&Notice::error("No quotes to export!")));
    }

    #[test]
    fn export_result_updates_status_or_notifies() {
        let mut state = booted();

        send(
            &mut state,
            &[Event::WorkerResponse(WorkerResponse::FileWritten {
                path: "/host/quotes.json".into(),
                bytes: 120,
            })],
        );
        assert_eq!(state.status.as_deref(), Some("Exported to ~/quotes.json"));
        assert!(state.notice().is_none());

        send(
            &mut state,
            &[Event::WorkerResponse(WorkerResponse::FileWriteFailed {
                path: "/host/quotes.json".into(),
                message: "read-only".into(),
            })],
        );
        assert_eq!(state.notice().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn import_round_trip_doubles_the_collection() {
        let mut state = booted();
        let original = state.store.quotes().to_vec();
        let exported = serde_json::to_string_pretty(&original).unwrap();

        send(&mut state, &[Event::FocusImport]);
        type_text(&mut state, "~/quotes.json");
        let actions = send(&mut state, &[Event::Submit]);

        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::ReadFile {
                path: "/host/quotes.json".into(),
                trace_context: None,
            })]
        );
        assert_eq!(state.input_mode, InputMode::Normal);

        send(
            &mut state,
            &[Event::WorkerResponse(WorkerResponse::FileRead {
                path: "/host/quotes.json".into(),
                contents: exported,
            })],
        );

        assert_eq!(state.store.len(), 16);
        assert_eq!(&state.store.quotes()[8..], original.as_slice());
        assert_eq!(persisted(&state).len(), 16);
        assert_eq!(
            state.notice(),
            Some(&Notice::success("Successfully imported 8 quotes!"))
        );
        assert_eq!(state.transfer.state(), &ImportState::Idle);
        assert!(state.transfer.surface().unwrap().chooser.is_empty());
    }

    #[test]
    fn invalid_import_leaves_collection_untouched() {
        let mut state = booted();
        send(&mut state, &[Event::FocusImport]);
        type_text(&mut state, "bad.json");
        send(&mut state, &[Event::Submit]);

        send(
            &mut state,
            &[Event::WorkerResponse(WorkerResponse::FileRead {
                path: "/host/bad.json".into(),
                contents: r#"[{"text": "a", "category": "b"}, {"text": "c"}]"#.into(),
            })],
        );

        assert_eq!(state.store.len(), 8);
        assert_eq!(persisted(&state), default_quotes());
        assert!(state.notice().unwrap().message.contains("position 2"));
    }

    #[test]
    fn unexpected_read_result_is_ignored() {
        let mut state = booted();

        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::FileRead {
                path: "/host/other.json".into(),
                contents: "[]".into(),
            }),
        )
        .unwrap();

        assert!(!render);
        assert!(state.notice().is_none());
    }

    #[test]
    fn keys_still_work_while_import_is_reading() {
        let mut state = booted();
        send(&mut state, &[Event::FocusImport]);
        type_text(&mut state, "slow.json");
        send(&mut state, &[Event::Submit]);

        let (render, _) = handle_event(&mut state, &Event::ShowNewQuote).unwrap();
        assert!(render);

        send(&mut state, &[Event::FocusImport]);
        type_text(&mut state, "again.json");
        let actions = send(&mut state, &[Event::Submit]);

        assert!(actions.is_empty());
        assert_eq!(state.notice().unwrap().kind, NoticeKind::Info);
    }

    #[test]
    fn escape_leaves_text_entry() {
        let mut state = booted();
        send(&mut state, &[Event::FocusImport]);
        type_text(&mut state, "half");
        send(&mut state, &[Event::Escape]);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.transfer.surface().unwrap().chooser.is_empty());

        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
    }
}
