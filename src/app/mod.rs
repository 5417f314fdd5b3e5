//! Application layer: the interaction state machine.
//!
//! This module sits between the presentation driver (main.rs) and the
//! storage layer. It owns every rule about what a key does in a given mode.
//!
//! # Architecture
//!
//! ```text
//! KeyPress → map_key → LogicalKey → transition → Commands → ListStore / engine state
//!                                                                ↓
//!                                                         RenderSnapshot
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Commands and transitions returned by the table
//! - [`filter`]: Literal substring projection over the list
//! - [`handler`]: The pure (mode, key) transition table
//! - [`keymap`]: Physical to logical key mapping per mode
//! - [`modes`]: Mode and logical key types
//! - [`snapshot`]: Read-only render snapshot
//! - [`state`]: The interaction engine that applies transitions

pub mod actions;
pub mod filter;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod snapshot;
pub mod state;

pub use actions::{Command, Transition};
pub use filter::FilteredView;
pub use keymap::{map_key, KeyCode, KeyPress};
pub use modes::{LogicalKey, Mode, ModeKind};
pub use snapshot::{RenderSnapshot, SnapshotRow, StatusLevel, StatusMessage};
pub use state::{InteractionEngine, Outcome};
