//! Header component renderer.

use crate::ui::helpers::{char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Marker appended to the title while there are unsaved changes.
const DIRTY_MARKER: &str = "[+] ";

/// Renders the title bar at `row`, centered and padded to full width.
///
/// The unsaved-changes marker sits right after the title in the `dirty_fg`
/// color.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let marker = if header.dirty { DIRTY_MARKER } else { "" };
    let title_len = char_width(&header.title).min(cols);
    let marker_len = char_width(marker).min(cols - title_len);
    let padding = cols.saturating_sub(title_len + marker_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title.chars().take(title_len).collect::<String>());
    if marker_len > 0 {
        print!("{}", Theme::fg(&theme.colors.dirty_fg));
        print!("{}", &marker[..marker_len]);
        print!("{}", Theme::fg(&theme.colors.header_fg));
    }
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len + marker_len)));

    print!("{}", Theme::reset());
    row + 1
}
