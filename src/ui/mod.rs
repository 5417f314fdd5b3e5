//! User interface rendering layer with component-based architecture.
//!
//! Turns the engine's [`RenderSnapshot`](crate::app::RenderSnapshot) into
//! ANSI-styled output for the plugin pane.
//!
//! # Architecture
//!
//! ```text
//! RenderSnapshot → compute_viewmodel → UIViewModel → components → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready view model and its computation
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, centering)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, DEFAULT_THEME};
pub use viewmodel::{
    compute_viewmodel, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, StatusLine,
    StatusTone, UIViewModel,
};
