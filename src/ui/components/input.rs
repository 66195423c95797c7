//! Single-line input field renderer shared by the form and the import chooser.

use crate::ui::helpers::{char_width, position_cursor, truncate_start};
use crate::ui::theme::Theme;

/// Width of the label column.
const LABEL_WIDTH: usize = 11;

/// Renders `  Label:     │value█     │` at `row`.
///
/// The border takes the focus color when `focused`, and the cursor block is only
/// drawn then. Long values scroll so their end stays visible. Empty values show
/// `placeholder` dimmed.
pub fn render_input(
    row: usize,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
    cols: usize,
) -> usize {
    let border = if focused {
        &theme.colors.input_focus_border
    } else {
        &theme.colors.input_border
    };
    let inner = cols.saturating_sub(LABEL_WIDTH + 4);
    let shown = truncate_start(value, inner.saturating_sub(usize::from(focused)));

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("  {label:<width$}", width = LABEL_WIDTH - 2);
    print!("{}", Theme::fg(border));
    print!("│");

    let mut used = char_width(&shown);
    if shown.is_empty() && !focused {
        let hint = truncate_start(placeholder, inner);
        used = char_width(&hint);
        print!("{}{}{hint}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("{}", Theme::reset());
    } else {
        print!("{}{shown}", Theme::fg(&theme.colors.text_normal));
        if focused {
            print!("{}█", Theme::fg(border));
            used += 1;
        }
    }

    print!("{}", " ".repeat(inner.saturating_sub(used)));
    print!("{}│", Theme::fg(border));
    print!("{}", Theme::reset());
    row + 1
}
