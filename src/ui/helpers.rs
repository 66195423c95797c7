//! Shared rendering utilities.
//!
//! Widths are counted in `char`s, which matches the pane for the text this plugin
//! displays; wide glyphs may overrun by a column.

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of `char`s in `text`.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` chars, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if char_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Keeps the last `max` chars of `text`, marking the cut with `…`.
///
/// Used for input fields so the cursor end stays visible.
#[must_use]
pub fn truncate_start(text: &str, max: usize) -> String {
    let width = char_width(text);
    if width <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut = String::from('…');
    cut.extend(text.chars().skip(width - (max - 1)));
    cut
}

/// Greedy word wrap to `width` columns.
///
/// Words longer than a line are split. Explicit newlines are kept.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if line_width > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if line_width == 0 { word.len() } else { word.len() + 1 };
            if line_width > 0 && line_width + needed > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line_width += word.len();
            line.extend(word);
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap_text("The only way to do great work", 12),
            vec!["The only way", "to do great", "work"]
        );
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap_text("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn wrap_keeps_blank_paragraphs() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn truncation_is_char_based() {
        assert_eq!(truncate("héllo wörld", 6), "héllo…");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate_start("/host/some/long/path.json", 10), "…path.json");
    }
}
