//! View model types representing renderable UI state.
//!
//! Computed by `AppState::compute_viewmodel()` and consumed by the renderer. They
//! carry display-ready strings only; no business logic.

use crate::app::form::FormField;
use crate::app::notice::NoticeKind;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub quote: QuotePanel,
    /// `None` until the form has been built.
    pub form: Option<FormPanel>,
    /// `None` until the transfer controls have been built.
    pub transfer: Option<TransferPanel>,
    /// Last non-blocking message, e.g. a finished export.
    pub status: Option<String>,
    pub footer: FooterInfo,
    /// Front of the notice queue, drawn over everything else.
    pub notice: Option<NoticeBox>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Content of the quote panel, already wrapped to the pane width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotePanel {
    pub lines: Vec<String>,
    /// Category label line, absent for the placeholder.
    pub category: Option<String>,
    pub is_placeholder: bool,
}

/// The add-quote form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPanel {
    pub text: String,
    pub category: String,
    /// Field with the cursor, `None` when the form is not in focus.
    pub focus: Option<FormField>,
}

/// Export target and import chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPanel {
    /// Where `e` writes, shown relative to the home directory.
    pub export_target: String,
    pub chooser: String,
    /// File type suggested by the chooser.
    pub hint: String,
    /// Whether the chooser has keyboard focus.
    pub chooser_active: bool,
    /// Path being read, while an import is in flight.
    pub importing: Option<String>,
}

/// A blocking notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeBox {
    pub kind: NoticeKind,
    pub title: String,
    pub lines: Vec<String>,
    /// Notices still queued behind this one.
    pub pending: usize,
}
