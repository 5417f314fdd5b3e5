//! List component renderer.
//!
//! One line per item: a right-aligned 1-based number, then the text. The
//! selected row gets the selection colors across the full width, and the row
//! under edit gets the edit colors with a cursor after the buffer.

use crate::ui::helpers::{self, char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders `items` starting at `row`, stopping before `last_row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_list_rows(
    row: usize,
    last_row: usize,
    items: &[DisplayItem],
    number_width: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        if current_row >= last_row {
            break;
        }
        current_row = render_list_row(current_row, item, number_width, theme, cols);
    }
    current_row
}

/// Styling precedence: edit colors, then selection colors, then match
/// highlights on unselected rows.
fn render_list_row(row: usize, item: &DisplayItem, number_width: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_editing {
        print!("{}", Theme::fg(&theme.colors.edit_fg));
        print!("{}", Theme::bg(&theme.colors.edit_bg));
    } else if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }

    let number = format!(" {:>number_width$}  ", item.number);
    print!("{number}");

    if !item.is_editing && !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    helpers::render_highlighted_text(&item.text, &item.highlight_ranges, theme, item.is_selected);

    let mut line_len = char_width(&number) + char_width(&item.text);
    if item.is_editing {
        print!("{}", Theme::bold());
        print!("▏");
        line_len += 1;
    }

    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
    row + 1
}
