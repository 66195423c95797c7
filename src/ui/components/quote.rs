//! Quote panel renderer.

use crate::ui::helpers::{char_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::QuotePanel;

/// Renders the quote panel starting at `row`, using at most `max_rows` rows.
///
/// ```text
/// [blank]
///     "The only way to do great work is to
///     love what you do."
///                       - Category: Inspiration
/// [blank]
/// ```
///
/// Quote lines that do not fit are dropped from the end, with `…` on the last
/// visible one. Returns the next free row.
pub fn render_quote(
    row: usize,
    panel: &QuotePanel,
    theme: &Theme,
    cols: usize,
    max_rows: usize,
) -> usize {
    const MARGIN: usize = 4;

    let reserved = 2 + usize::from(panel.category.is_some());
    let text_rows = max_rows.saturating_sub(reserved).max(1);
    let mut current_row = row + 1;

    let color = if panel.is_placeholder {
        &theme.colors.placeholder_fg
    } else {
        &theme.colors.quote_fg
    };

    for (i, line) in panel.lines.iter().take(text_rows).enumerate() {
        let clipped = i + 1 == text_rows && panel.lines.len() > text_rows;
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(MARGIN));
        if !panel.is_placeholder {
            print!("{}", Theme::italic());
        }
        print!("{}", Theme::fg(color));
        if clipped {
            print!("{}…", truncate(line, cols.saturating_sub(MARGIN * 2 + 1)));
        } else {
            print!("{line}");
        }
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if let Some(category) = &panel.category {
        let label = truncate(category, cols.saturating_sub(MARGIN));
        position_cursor(current_row, 1);
        print!(
            "{}",
            " ".repeat(cols.saturating_sub(MARGIN + char_width(&label)))
        );
        print!("{}", Theme::fg(&theme.colors.category_fg));
        print!("{label}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row + 1
}
