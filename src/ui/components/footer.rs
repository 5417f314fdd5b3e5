//! Footer component renderer.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the key hints at `row`, centered and dimmed.
///
/// Hints wider than the pane are cut to fit.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Example
///
/// ```rust
/// use justlists::ui::components::render_footer;
/// use justlists::ui::viewmodel::FooterInfo;
/// use justlists::ui::Theme;
///
/// let footer = FooterInfo { keybindings: "q: exit".to_string() };
/// assert_eq!(render_footer(24, &footer, &Theme::default(), 80), 25);
/// ```
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&footer.keybindings, cols);
    print!("{}", Theme::reset());
    row + 1
}
