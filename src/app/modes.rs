//! Input mode state machine.
//!
//! ```text
//!   Normal ──a──► Form         Enter submits and stays, Esc returns
//!     │
//!     └────i──► ImportPath     Enter requests the read and returns, Esc returns
//! ```
//!
//! A pending notice sits above all modes: while one is shown, keys only dismiss it.

/// Which panel receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Command keys: `n`, `a`, `e`, `i`, `q`.
    #[default]
    Normal,

    /// Typing into the add-quote form.
    Form,

    /// Typing a path into the import chooser.
    ImportPath,
}

impl InputMode {
    /// Whether characters typed in this mode are text rather than commands.
    #[must_use]
    pub const fn is_text_entry(self) -> bool {
        matches!(self, Self::Form | Self::ImportPath)
    }
}
