//! Notice modal renderer.

use crate::ui::helpers::{char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NoticeBox;

/// Draws the notice as a box centered over whatever is already on screen.
///
/// ```text
/// ┌─ Success ──────────────────┐
/// │                            │
/// │ Quote added successfully!  │
/// │                            │
/// │          Enter: OK         │
/// └────────────────────────────┘
/// ```
pub fn render_notice(notice: &NoticeBox, theme: &Theme, rows: usize, cols: usize) {
    let content_width = notice
        .lines
        .iter()
        .map(|l| char_width(l))
        .max()
        .unwrap_or(0)
        .max(char_width(&notice.title) + 2)
        .max(16);
    let inner = (content_width + 2).min(cols.saturating_sub(2));
    let height = notice.lines.len() + 5;

    let left = cols.saturating_sub(inner + 2) / 2 + 1;
    let top = rows.saturating_sub(height) / 2 + 1;

    let accent = Theme::fg(theme.colors.notice(notice.kind));
    let background = Theme::bg(&theme.colors.notice_bg);
    let text = Theme::fg(&theme.colors.text_normal);

    let body_line = |row: usize, content: &str, style: &str| {
        let pad = inner.saturating_sub(char_width(content) + 1);
        position_cursor(row, left);
        print!("{background}{accent}│{style} {content}{}{accent}│", " ".repeat(pad));
        print!("{}", Theme::reset());
    };

    position_cursor(top, left);
    let title_len = char_width(&notice.title);
    print!("{background}{accent}┌─{}{}", Theme::bold(), notice.title);
    print!("{}{background}{accent}", Theme::reset());
    print!("{}┐", "─".repeat(inner.saturating_sub(title_len + 1)));
    print!("{}", Theme::reset());

    let mut row = top + 1;
    body_line(row, "", &text);
    row += 1;
    for line in &notice.lines {
        body_line(row, line, &text);
        row += 1;
    }
    body_line(row, "", &text);
    row += 1;

    let prompt = if notice.pending > 0 {
        format!("Enter: OK ({} more)", notice.pending)
    } else {
        "Enter: OK".to_string()
    };
    let centered = format!(
        "{}{prompt}",
        " ".repeat(inner.saturating_sub(char_width(&prompt) + 2) / 2)
    );
    body_line(row, &centered, &Theme::fg(&theme.colors.text_dim));

    position_cursor(row + 1, left);
    print!("{background}{accent}└{}┘", "─".repeat(inner));
    print!("{}", Theme::reset());
}
