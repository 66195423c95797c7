//! Composable UI component renderers.
//!
//! - [`header`]: title bar with the collection size
//! - [`quote`]: the current quote or the placeholder
//! - [`form`]: the add-quote form
//! - [`transfer`]: export target and import chooser
//! - [`footer`]: status line and keybinding hints
//! - [`notice`]: blocking notice modal
//!
//! Layout:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Quote panel, grows with the quote]
//! [Border]
//! [Form: title, quote field, category field]
//! [blank]
//! [Transfer: export target, import chooser]
//! ...
//! [Status]
//! [Border]
//! [Footer]
//! ```

mod footer;
mod form;
mod header;
mod input;
mod notice;
mod quote;
mod transfer;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::{render_footer, render_status};
use form::render_form;
use header::render_header;
use notice::render_notice;
use quote::render_quote;
use transfer::render_transfer;

/// Rows taken by the form panel.
const FORM_ROWS: usize = 3;
/// Rows taken by the transfer panel.
const TRANSFER_ROWS: usize = 2;

/// Renders a horizontal border at `row`. Returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every panel of `vm`, then the notice modal on top if there is one.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let footer_row = rows.saturating_sub(1);
    let bottom_border = footer_row.saturating_sub(1);
    let status_row = bottom_border.saturating_sub(1);

    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let below_quote = 1
        + vm.form.as_ref().map_or(0, |_| FORM_ROWS + 1)
        + vm.transfer.as_ref().map_or(0, |_| TRANSFER_ROWS);
    let quote_rows = status_row.saturating_sub(current_row + below_quote);
    current_row = render_quote(current_row, &vm.quote, theme, cols, quote_rows);

    if vm.form.is_some() || vm.transfer.is_some() {
        current_row = render_border(current_row, &theme.colors.border, cols);
    }
    if let Some(form) = &vm.form {
        current_row = render_form(current_row, form, theme, cols) + 1;
    }
    if let Some(transfer) = &vm.transfer {
        render_transfer(current_row, transfer, theme, cols);
    }

    if let Some(status) = &vm.status {
        render_status(status_row, status, theme, cols);
    }
    render_border(bottom_border, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(notice) = &vm.notice {
        render_notice(notice, theme, rows, cols);
    }
}
