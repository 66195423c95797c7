//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are the four Catppuccin flavours; custom themes are TOML files
//! with the same layout:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! quote_fg = "#cdd6f4"
//! category_fg = "#cba6f7"
//! placeholder_fg = "#89b4fa"
//! input_border = "#45475a"
//! input_focus_border = "#f5c2e7"
//! notice_success = "#a6e3a1"
//! notice_error = "#f38ba8"
//! notice_info = "#89b4fa"
//! notice_bg = "#1e1e2e"
//! ```

use crate::app::notice::NoticeKind;
use crate::domain::error::{QuotebookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every UI element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Footer, hints, status line.
    pub text_dim: String,
    pub border: String,

    pub quote_fg: String,
    pub category_fg: String,
    pub placeholder_fg: String,

    pub input_border: String,
    pub input_focus_border: String,

    pub notice_success: String,
    pub notice_error: String,
    pub notice_info: String,
    pub notice_bg: String,
}

impl ThemeColors {
    /// Accent color for a notice of `kind`.
    #[must_use]
    pub fn notice(&self, kind: NoticeKind) -> &str {
        match kind {
            NoticeKind::Success => &self.notice_success,
            NoticeKind::Error => &self.notice_error,
            NoticeKind::Info => &self.notice_info,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Errors
    ///
    /// Returns [`QuotebookError::Theme`] for an unknown name.
    pub fn from_name(name: &str) -> Result<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return Err(QuotebookError::Theme(format!("unknown theme '{name}'"))),
        };

        Self::from_toml(toml_str)
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`QuotebookError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| QuotebookError::Theme(format!("failed to read theme file: {e}")))?;

        Self::from_toml(&contents)
    }

    fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| QuotebookError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Colorless theme using the terminal's own palette.
    ///
    /// Only reached if a built-in theme fails to parse.
    fn plain() -> Self {
        let fg = String::from("#c0c0c0");
        Self {
            name: "plain".to_string(),
            colors: ThemeColors {
                header_fg: "#ffffff".to_string(),
                header_bg: None,
                text_normal: fg.clone(),
                text_dim: "#808080".to_string(),
                border: "#808080".to_string(),
                quote_fg: "#ffffff".to_string(),
                category_fg: fg.clone(),
                placeholder_fg: fg.clone(),
                input_border: "#808080".to_string(),
                input_focus_border: "#ffffff".to_string(),
                notice_success: fg.clone(),
                notice_error: "#ff5f5f".to_string(),
                notice_info: fg,
                notice_bg: "#000000".to_string(),
            },
        }
    }

    /// Converts `#rrggbb` to RGB, white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground sequence for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "built-in theme unusable, falling back to plain colors");
            Self::plain()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_theme_parses() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_theme_is_an_error() {
        assert!(matches!(
            Theme::from_name("solarized"),
            Err(QuotebookError::Theme(_))
        ));
    }

    #[test]
    fn default_is_mocha() {
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn theme_file_is_loaded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        assert_eq!(Theme::from_file(&path).unwrap().name, "custom");
    }

    #[test]
    fn broken_theme_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "name = \"x\"\n[colors]\nheader_fg = 3\n").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(QuotebookError::Theme(_))));
        assert!(Theme::from_file(dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn hex_colors_become_escape_sequences() {
        assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
        assert_eq!(Theme::bg("nonsense"), "\u{1b}[48;2;255;255;255m");
    }
}
