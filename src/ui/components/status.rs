//! Status line component renderer.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusLine, StatusTone};

/// Renders the status line at `row`, or a blank line when there is none.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_status(row: usize, status: Option<&StatusLine>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    match status {
        Some(status) => {
            let color = match status.tone {
                StatusTone::Info => &theme.colors.text_dim,
                StatusTone::Warning => &theme.colors.dirty_fg,
                StatusTone::Error => &theme.colors.error_fg,
            };
            if status.tone != StatusTone::Info {
                print!("{}", Theme::bold());
            }
            print!("{}", Theme::fg(color));
            print_centered(&status.text, cols);
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }

    row + 1
}
