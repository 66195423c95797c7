//! Turns a quote (or its absence) into display content.

use crate::domain::Quote;

/// Text shown when there is no quote to display.
pub const PLACEHOLDER: &str = "No quotes available. Add some quotes to get started!";

/// Content of the quote panel.
///
/// Each call to [`render`] replaces the whole value; nothing is appended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplaySurface {
    /// Nothing rendered yet.
    #[default]
    Blank,
    /// A quote, already decorated for display.
    Quote {
        /// Quote text wrapped in double quotes.
        text: String,
        /// Category label, `- Category: <name>`.
        category: String,
    },
    /// The empty-collection message.
    Placeholder(String),
}

/// Renders `quote` into a fresh display surface.
///
/// ```
/// use quotebook::ui::presenter::{render, DisplaySurface, PLACEHOLDER};
/// use quotebook::Quote;
///
/// let shown = render(Some(&Quote::new("Stay hungry.", "Motivation")));
/// assert_eq!(
///     shown,
///     DisplaySurface::Quote {
///         text: "\"Stay hungry.\"".into(),
///         category: "- Category: Motivation".into(),
///     }
/// );
/// assert_eq!(render(None), DisplaySurface::Placeholder(PLACEHOLDER.into()));
/// ```
#[must_use]
pub fn render(quote: Option<&Quote>) -> DisplaySurface {
    quote.map_or_else(
        || DisplaySurface::Placeholder(PLACEHOLDER.to_string()),
        |quote| DisplaySurface::Quote {
            text: format!("\"{}\"", quote.text),
            category: format!("- Category: {}", quote.category),
        },
    )
}
