//! Shared rendering utilities.
//!
//! Low-level helpers used by several components: cursor placement, centered
//! lines, and match highlighting. All widths are counted in characters, not
//! bytes, so list items with non-ASCII text line up.

use crate::ui::theme::Theme;

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in characters.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Prints `text` centered in `cols`, padding both sides so the line is full width.
///
/// Text wider than `cols` is cut. The caller sets colors beforehand and
/// resets them afterwards.
pub fn print_centered(text: &str, cols: usize) {
    let text_len = char_width(text).min(cols);
    let padding = cols.saturating_sub(text_len) / 2;

    print!("{}", " ".repeat(padding));
    print!("{}", text.chars().take(text_len).collect::<String>());
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
}

/// Renders text with highlighted character ranges for filter matches.
///
/// `ranges` are `(start, end)` character indices with an exclusive end, in
/// ascending order. When `is_selected` is set the highlight is skipped so the
/// selection background stays uniform.
///
/// # Example
///
/// ```rust
/// use justlists::ui::helpers::render_highlighted_text;
/// use justlists::ui::Theme;
///
/// let theme = Theme::default();
/// render_highlighted_text("banana", &[(1, 3), (3, 5)], &theme, false);
/// ```
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
