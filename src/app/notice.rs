//! Blocking notices shown over the plugin pane.

use crate::domain::QuotebookError;

/// Tone of a notice, used for its title and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Info => "Notice",
        }
    }
}

/// A message the user has to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

impl From<&QuotebookError> for Notice {
    fn from(err: &QuotebookError) -> Self {
        match err {
            QuotebookError::ImportInProgress { .. } => Self::info(err.to_string()),
            _ => Self::error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_become_error_notices_with_their_message() {
        let notice = Notice::from(&QuotebookError::NothingToExport);
        assert_eq!(notice, Notice::error("No quotes to export!"));
    }

    #[test]
    fn busy_import_is_informational() {
        let notice = Notice::from(&QuotebookError::ImportInProgress {
            path: "/host/a.json".into(),
        });
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice.message.contains("/host/a.json"));
    }
}
