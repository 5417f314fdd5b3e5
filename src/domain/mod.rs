//! Domain layer for the justlists plugin.
//!
//! Core types that know nothing about Zellij, the list file, or the
//! interaction modes.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: The single-line list item

pub mod error;
pub mod item;

pub use error::{JustlistsError, Result};
pub use item::Item;
