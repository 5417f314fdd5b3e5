//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: [`RenderSnapshot`] into [`UIViewModel`](crate::ui::UIViewModel)
//! 2. **Component Rendering**: delegate to the component renderers
//!
//! Output goes to stdout, which Zellij draws into the plugin pane. The
//! screen is not cleared here; the host hands the plugin a fresh frame.

use crate::app::RenderSnapshot;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::compute_viewmodel;

/// Renders one frame for `snapshot` into a `rows` x `cols` pane.
///
/// # Example
///
/// ```rust
/// use justlists::app::InteractionEngine;
/// use justlists::storage::{ListStore, TextFileStorage};
/// use justlists::ui::{render, Theme};
///
/// let store = ListStore::new(Box::new(TextFileStorage::new("/tmp/frame.list")));
/// let engine = InteractionEngine::new(&store);
/// render(&engine.snapshot(&store), &Theme::default(), 24, 80);
/// ```
pub fn render(snapshot: &RenderSnapshot, theme: &Theme, rows: usize, cols: usize) {
    let viewmodel = compute_viewmodel(snapshot, rows, cols);
    components::render_layout(&viewmodel, theme, cols, rows);
}
