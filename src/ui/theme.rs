//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are embedded TOML files; custom themes use the same format.
//!
//! # Built-in Themes
//!
//! - `ember-dark`: Warm dark theme (default)
//! - `paper-light`: Light theme with muted blues
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e6dcc8"
//! selection_fg = "#1c1714"
//! selection_bg = "#e8a35c"
//! text_normal = "#e6dcc8"
//! text_dim = "#8a7d6e"
//! border = "#4a3e35"
//! filter_bar_border = "#e8a35c"
//! match_highlight_fg = "#1c1714"
//! match_highlight_bg = "#d7c36a"
//! edit_fg = "#1c1714"
//! edit_bg = "#8fbf7f"
//! empty_state_fg = "#7fa7bf"
//! dirty_fg = "#e8a35c"
//! error_fg = "#e06c5c"
//! ```

use crate::domain::error::{JustlistsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "ember-dark";

const EMBER_DARK: &str = include_str!("../../themes/ember-dark.toml");
const PAPER_LIGHT: &str = include_str!("../../themes/paper-light.toml");

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#e6dcc8"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, disabled filter text, secondary info.
    pub text_dim: String,

    pub border: String,

    pub filter_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Row being edited.
    pub edit_fg: String,
    pub edit_bg: String,

    pub empty_state_fg: String,

    /// Unsaved-changes marker and exit prompt.
    pub dirty_fg: String,
    /// Error status messages.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use justlists::ui::Theme;
    ///
    /// let theme = Theme::from_name("paper-light").unwrap();
    /// assert_eq!(theme.name, "paper-light");
    /// assert!(Theme::from_name("nope").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "ember-dark" => EMBER_DARK,
            "paper-light" => PAPER_LIGHT,
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`JustlistsError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| JustlistsError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| JustlistsError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Parses `#rrggbb`; falls back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
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
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the built-in `ember-dark` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the unit tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("embedded default theme must parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        for name in ["ember-dark", "paper-light"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#zz"), "\u{001b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#102030"), "\u{001b}[48;2;16;32;48m");
    }

    #[test]
    fn custom_theme_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, EMBER_DARK.replace("ember-dark", "custom")).unwrap();
        assert_eq!(Theme::from_file(&path).unwrap().name, "custom");

        fs::write(&path, "name = 1").unwrap();
        assert!(matches!(Theme::from_file(&path), Err(JustlistsError::Theme(_))));
    }
}
