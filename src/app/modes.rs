//! Interaction mode and logical key types.
//!
//! This module defines the state machine enums that control how input is
//! interpreted. Exactly one [`Mode`] is active at a time; [`LogicalKey`] is the
//! abstract input alphabet, decoupled from any physical key code.
//!
//! # State Machine
//!
//! - **Browsing**: Default navigation and command mode
//! - **Filtering**: Live-edited pattern narrows the visible list
//! - **Editing**: A working copy of one item is being edited
//! - **`ExitConfirm`**: Exit was requested with unsaved changes
//!
//! # Example
//!
//! ```rust
//! use justlists::app::modes::{Mode, ModeKind};
//!
//! let mode = Mode::Filtering { pattern: "milk".to_string() };
//! assert_eq!(mode.kind(), ModeKind::Filtering);
//! ```

/// Current interaction mode, carrying the data that only exists in that mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    /// Navigation and command keys are active.
    #[default]
    Browsing,

    /// The list view is projected through `pattern`, which is edited live.
    Filtering {
        /// Literal substring every visible item must contain.
        pattern: String,
    },

    /// `buffer` is a working copy of the item at `target_index`.
    ///
    /// Nothing is written back to the list until Confirm.
    Editing {
        /// Index in the full list that Confirm replaces.
        target_index: usize,
        /// Text being edited.
        buffer: String,
    },

    /// Exit was requested while the list had unsaved changes.
    ExitConfirm,
}

impl Mode {
    /// Returns the data-free discriminant of this mode.
    #[must_use]
    pub const fn kind(&self) -> ModeKind {
        match self {
            Self::Browsing => ModeKind::Browsing,
            Self::Filtering { .. } => ModeKind::Filtering,
            Self::Editing { .. } => ModeKind::Editing,
            Self::ExitConfirm => ModeKind::ExitConfirm,
        }
    }
}

/// Data-free mode tag, used by the key map and the render snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Browsing,
    Filtering,
    Editing,
    ExitConfirm,
}

impl ModeKind {
    /// Short label for the header and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Browsing => "LIST",
            Self::Filtering => "FILTER",
            Self::Editing => "EDIT",
            Self::ExitConfirm => "EXIT?",
        }
    }
}

/// Abstract input symbols delivered by the presentation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    /// Accept the current edit, filter, or exit prompt.
    Confirm,
    /// Abandon the current edit or exit prompt.
    Cancel,
    /// Append a new blank item and start editing it.
    Add,
    /// Start editing the selected item.
    Edit,
    /// Remove the selected item.
    Delete,
    /// Enter filtering with an empty pattern.
    FilterStart,
    /// Persist the list.
    Save,
    /// Request termination.
    Exit,
    /// Move the selection up by one.
    Up,
    /// Move the selection down by one.
    Down,
    /// Select the first item.
    First,
    /// Select the last item.
    Last,
    /// Select the item at this index in the full list, e.g. from a mouse click.
    Select(usize),
    /// Append a character to the filter pattern or edit buffer.
    Input(char),
    /// Remove the last character from the filter pattern or edit buffer.
    Erase,
}
