//! Export/import panel renderer.

use super::input::render_input;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TransferPanel;

/// Renders the export target and the import chooser. Returns the next free row.
///
/// While a read is in flight the chooser is replaced by the path being read.
pub fn render_transfer(row: usize, panel: &TransferPanel, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("  {:<9}", "Export:");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", truncate(&format!("e → {}", panel.export_target), cols.saturating_sub(11)));
    print!("{}", Theme::reset());

    if let Some(path) = &panel.importing {
        position_cursor(row + 1, 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("  {:<9}", "Import:");
        print!("{}", Theme::fg(&theme.colors.placeholder_fg));
        print!("{}", truncate(&format!("reading {path}..."), cols.saturating_sub(11)));
        print!("{}", Theme::reset());
        return row + 2;
    }

    render_input(
        row + 1,
        "Import:",
        &panel.chooser,
        &format!("i, then a path ({})", panel.hint),
        panel.chooser_active,
        theme,
        cols,
    )
}
