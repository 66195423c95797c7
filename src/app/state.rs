//! Application state and view model computation.
//!
//! [`AppState`] owns every component: the store and session cache, the picker, the
//! form and transfer controls, the current display surface and the notice queue.
//! The event handler is the only writer; the renderer reads it through
//! [`AppState::compute_viewmodel`].

use super::form::QuoteForm;
use super::modes::InputMode;
use super::notice::Notice;
use super::picker::Picker;
use super::transfer::{ImportState, Transfer, IMPORT_EXTENSION_HINT};
use crate::domain::QuotebookError;
use crate::infrastructure::strip_host_prefix;
use crate::storage::{QuoteStore, SessionCache};
use crate::ui::helpers::wrap_text;
use crate::ui::presenter::{self, DisplaySurface};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    FooterInfo, FormPanel, HeaderInfo, NoticeBox, QuotePanel, TransferPanel, UIViewModel,
};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Columns reserved around the quote text.
const QUOTE_MARGIN: usize = 4;

/// Widest a notice box gets, borders included.
const NOTICE_MAX_WIDTH: usize = 60;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    pub store: QuoteStore,
    pub session: SessionCache,
    pub picker: Picker,
    pub form: QuoteForm,
    pub transfer: Transfer,

    /// What the quote panel currently shows.
    pub display: DisplaySurface,

    pub input_mode: InputMode,

    /// Blocking notices, oldest first.
    pub notices: VecDeque<Notice>,

    /// Last non-blocking message.
    pub status: Option<String>,

    pub theme: Theme,

    /// Set once the startup sequence has run.
    pub bootstrapped: bool,
}

impl AppState {
    #[must_use]
    pub fn new(
        store: QuoteStore,
        session: SessionCache,
        picker: Picker,
        theme: Theme,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            store,
            session,
            picker,
            form: QuoteForm::new(),
            transfer: Transfer::new(export_dir),
            display: DisplaySurface::Blank,
            input_mode: InputMode::Normal,
            notices: VecDeque::new(),
            status: None,
            theme,
            bootstrapped: false,
        }
    }

    /// Picks a random quote, displays it and remembers it for the session.
    ///
    /// With an empty collection the placeholder is shown and nothing is remembered.
    pub fn show_new_quote(&mut self) {
        let picked = self.picker.pick_random(&self.store);
        self.display = presenter::render(picked.as_ref());

        if let Some(quote) = picked {
            if let Err(e) = self.session.remember(&quote) {
                tracing::warn!(error = %e, "failed to remember last viewed quote");
            }
        }
    }

    /// Shows the quote remembered this session, or a fresh pick if there is none.
    pub fn restore_or_pick(&mut self) {
        if let Some(quote) = self.session.recall() {
            tracing::debug!(category = %quote.category, "restoring last viewed quote");
            self.display = presenter::render(Some(&quote));
        } else {
            self.show_new_quote();
        }
    }

    /// Queues a blocking notice.
    pub fn notify(&mut self, notice: Notice) {
        tracing::debug!(kind = ?notice.kind, message = %notice.message, "notice queued");
        self.notices.push_back(notice);
    }

    /// Queues a notice describing `err`.
    pub fn report(&mut self, err: &QuotebookError) {
        if err.is_user_error() {
            tracing::debug!(error = %err, "rejected user input");
        } else {
            tracing::warn!(error = %err, "operation failed");
        }
        self.notify(Notice::from(err));
    }

    /// The notice currently shown, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Computes the view model for a pane of `rows` × `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        UIViewModel {
            header: self.compute_header(),
            quote: self.compute_quote_panel(cols),
            form: self.compute_form_panel(),
            transfer: self.compute_transfer_panel(),
            status: self.status.clone(),
            footer: self.compute_footer(),
            notice: self.compute_notice(cols),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.store.len();
        let noun = if count == 1 { "quote" } else { "quotes" };
        HeaderInfo {
            title: format!(" Quotebook ({count} {noun}) "),
        }
    }

    fn compute_quote_panel(&self, cols: usize) -> QuotePanel {
        let width = cols.saturating_sub(QUOTE_MARGIN * 2);
        match &self.display {
            DisplaySurface::Blank => QuotePanel {
                lines: vec![],
                category: None,
                is_placeholder: false,
            },
            DisplaySurface::Quote { text, category } => QuotePanel {
                lines: wrap_text(text, width),
                category: Some(category.clone()),
                is_placeholder: false,
            },
            DisplaySurface::Placeholder(message) => QuotePanel {
                lines: wrap_text(message, width),
                category: None,
                is_placeholder: true,
            },
        }
    }

    fn compute_form_panel(&self) -> Option<FormPanel> {
        self.form.surface().map(|surface| FormPanel {
            text: surface.text.clone(),
            category: surface.category.clone(),
            focus: (self.input_mode == InputMode::Form).then_some(surface.focus),
        })
    }

    fn compute_transfer_panel(&self) -> Option<TransferPanel> {
        self.transfer.surface().map(|surface| TransferPanel {
            export_target: strip_host_prefix(&self.transfer.export_path().to_string_lossy()),
            chooser: surface.chooser.clone(),
            hint: IMPORT_EXTENSION_HINT.to_string(),
            chooser_active: self.input_mode == InputMode::ImportPath,
            importing: match self.transfer.state() {
                ImportState::Reading { path } => Some(strip_host_prefix(path)),
                ImportState::Idle => None,
            },
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.notice().is_some() {
            "Enter/Esc: dismiss"
        } else {
            match self.input_mode {
                InputMode::Normal => {
                    "n: new quote  a: add quote  e: export  i: import  q: hide"
                }
                InputMode::Form => "Tab: switch field  Enter: add  Esc: back",
                InputMode::ImportPath => "Type a path  Enter: import  Esc: cancel",
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_notice(&self, cols: usize) -> Option<NoticeBox> {
        let notice = self.notice()?;
        let inner = cols.clamp(10, NOTICE_MAX_WIDTH).saturating_sub(4);
        Some(NoticeBox {
            kind: notice.kind,
            title: format!(" {} ", notice.kind.title()),
            lines: wrap_text(&notice.message, inner),
            pending: self.notices.len() - 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::form::FormField;
    use crate::app::notice::NoticeKind;
    use crate::domain::Quote;
    use crate::storage::MemoryStore;

    fn state() -> AppState {
        AppState::new(
            QuoteStore::new(Box::new(MemoryStore::new())),
            SessionCache::new(Box::new(MemoryStore::new())),
            Picker::seeded(3),
            Theme::default(),
            PathBuf::from("/host"),
        )
    }

    #[test]
    fn user_and_environment_errors_get_the_same_notice_title() {
        let mut state = state();
        state.report(&QuotebookError::Validation("Please fill in both fields".into()));
        state.report(&QuotebookError::Storage("disk full".into()));

        let titles: Vec<&str> = state.notices.iter().map(|n| n.kind.title()).collect();
        assert_eq!(state.notices[0].kind, NoticeKind::Error);
        assert_eq!(titles[0], titles[1]);
    }

    #[test]
    fn empty_collection_shows_placeholder_and_remembers_nothing() {
        let mut state = state();
        state.show_new_quote();

        assert_eq!(
            state.display,
            DisplaySurface::Placeholder(presenter::PLACEHOLDER.to_string())
        );
        assert_eq!(state.session.recall(), None);
    }

    #[test]
    fn shown_quote_is_remembered() {
        let mut state = state();
        state.store.commit([Quote::new("Only one", "Solo")]).unwrap();

        state.show_new_quote();

        assert_eq!(state.session.recall(), Some(Quote::new("Only one", "Solo")));
        assert_eq!(
            state.display,
            presenter::render(Some(&Quote::new("Only one", "Solo")))
        );
    }

    #[test]
    fn restore_prefers_the_session_quote() {
        let mut state = state();
        state.store.commit([Quote::new("In store", "A")]).unwrap();
        let remembered = Quote::new("From earlier", "B");
        state.session.remember(&remembered).unwrap();

        state.restore_or_pick();

        assert_eq!(state.display, presenter::render(Some(&remembered)));
    }

    #[test]
    fn viewmodel_wraps_quote_and_counts_collection() {
        let mut state = state();
        state
            .store
            .commit([Quote::new("one two three four five six", "Words")])
            .unwrap();
        state.show_new_quote();

        let vm = state.compute_viewmodel(24, 24);

        assert_eq!(vm.header.title, " Quotebook (1 quote) ");
        assert_eq!(vm.quote.lines, vec!["\"one two three", "four five six\""]);
        assert_eq!(vm.quote.category.as_deref(), Some("- Category: Words"));
        assert!(vm.form.is_none());
        assert!(vm.notice.is_none());
    }

    #[test]
    fn form_focus_is_only_shown_in_form_mode() {
        let mut state = state();
        state.form.ensure_initialized();

        assert_eq!(state.compute_viewmodel(24, 80).form.unwrap().focus, None);

        state.input_mode = InputMode::Form;
        assert_eq!(
            state.compute_viewmodel(24, 80).form.unwrap().focus,
            Some(FormField::Text)
        );
    }

    #[test]
    fn notices_queue_in_order() {
        let mut state = state();
        state.notify(Notice::success("first"));
        state.report(&QuotebookError::Shape);

        let vm = state.compute_viewmodel(24, 80);
        let notice = vm.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.lines, vec!["first"]);
        assert_eq!(notice.pending, 1);
        assert_eq!(vm.footer.keybindings, "Enter/Esc: dismiss");
    }

    #[test]
    fn transfer_panel_shows_home_relative_paths() {
        let mut state = state();
        state.transfer.ensure_initialized();

        let panel = state.compute_viewmodel(24, 80).transfer.unwrap();

        assert_eq!(panel.export_target, "~/quotes.json");
        assert_eq!(panel.hint, "*.json");
        assert_eq!(panel.importing, None);
    }
}
