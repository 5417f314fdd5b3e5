//! Filter bar component renderer.

use crate::ui::helpers::{char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Horizontal margin for the filter box (spaces on left and right).
const FILTER_BOX_MARGIN: usize = 5;

/// Renders the 3-line filter input box starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 3)
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Filter: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// A pattern too long for the box shows its tail, so the end being typed
/// stays visible. An inactive bar is drawn dimmed, without a cursor.
pub fn render_filter_bar(row: usize, filter: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(FILTER_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if filter.active {
        Theme::fg(&theme.colors.filter_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };
    let text_color = if filter.active {
        &theme.colors.text_normal
    } else {
        &theme.colors.text_dim
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(FILTER_BOX_MARGIN));
    print!("{border}┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let (label, cursor) = if filter.active {
        (" Filter: ", "▏")
    } else {
        (" Last filter: ", "")
    };
    let room = inner_width.saturating_sub(char_width(label) + char_width(cursor));
    let pattern_len = char_width(&filter.pattern);
    let shown: String = filter.pattern.chars().skip(pattern_len.saturating_sub(room)).collect();
    let filter_text = format!("{label}{shown}{cursor}");
    let padding = inner_width.saturating_sub(char_width(&filter_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(FILTER_BOX_MARGIN));
    print!("{border}│");
    print!("{}", Theme::fg(text_color));
    print!("{filter_text}");
    print!("{}", " ".repeat(padding));
    print!("{border}│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(FILTER_BOX_MARGIN));
    print!("{border}└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
