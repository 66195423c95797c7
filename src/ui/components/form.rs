//! Add-quote form renderer.

use super::input::render_input;
use crate::app::form::FormField;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormPanel;

/// Renders the form title and its two fields. Returns the next free row.
pub fn render_form(row: usize, form: &FormPanel, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(" Add a quote");
    print!("{}", Theme::reset());

    let row = render_input(
        row + 1,
        "Quote:",
        &form.text,
        "Enter a new quote",
        form.focus == Some(FormField::Text),
        theme,
        cols,
    );
    render_input(
        row,
        "Category:",
        &form.category,
        "Enter quote category",
        form.focus == Some(FormField::Category),
        theme,
        cols,
    )
}
