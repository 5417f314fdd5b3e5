//! Composable UI component renderers.
//!
//! Each component draws one part of the pane and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with location, count, mode, and dirty marker
//! - [`filter_bar`]: Filter input box, shown while filtering
//! - [`list`]: Numbered item rows with selection, edit, and match styling
//! - [`empty`]: Message shown in place of rows when there are none
//! - [`status`]: Save results and the exit prompt
//! - [`footer`]: Key hints for the current mode
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Filter Bar - 3 lines, Filtering only]
//! [List Rows or Empty State]
//! [Status]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod filter_bar;
mod footer;
mod header;
mod list;
mod status;

pub use footer::render_footer;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use filter_bar::render_filter_bar;
use header::render_header;
use list::render_list_rows;
use status::render_status;

/// Renders a horizontal border line at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole pane for `vm`.
///
/// The bottom three lines (status, border, footer) are anchored to the
/// bottom of the pane; the list fills whatever lies between.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(filter) = &vm.filter_bar {
        current_row = render_filter_bar(current_row, filter, theme, cols);
    }

    debug_assert_eq!(current_row, vm.first_row);

    let footer_row = rows.max(current_row + 3);
    let border_row = footer_row - 1;
    let status_row = border_row - 1;

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        render_list_rows(current_row, status_row, &vm.display_items, vm.number_width, theme, cols);
    }

    render_status(status_row, vm.status.as_ref(), theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
