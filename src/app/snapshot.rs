//! Read-only render snapshot handed to the presentation driver.
//!
//! A [`RenderSnapshot`] is produced after every input event by
//! [`InteractionEngine::snapshot`](crate::app::InteractionEngine::snapshot).
//! It owns its data, so the driver can keep it while the engine moves on.

use super::modes::ModeKind;

/// One visible row: the item's index in the full list and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRow {
    pub index: usize,
    pub text: String,
}

/// Severity of a status line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// One-line notice for the user, e.g. the result of a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

/// Everything the driver needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    /// Active mode.
    pub mode: ModeKind,

    /// Rows to display, in order.
    ///
    /// The full list in Browsing, Editing, and `ExitConfirm`; the filtered
    /// list in Filtering.
    pub rows: Vec<SnapshotRow>,

    /// Number of items in the full list.
    pub total: usize,

    /// Selected index into the full list, or `None`.
    pub selected: Option<usize>,

    /// Current filter pattern (the last one used, outside Filtering).
    pub filter_pattern: String,

    /// Edit buffer, only while Editing.
    pub edit_buffer: Option<String>,

    /// Index being edited, only while Editing.
    pub editing_index: Option<usize>,

    /// Whether the list has unsaved changes.
    pub dirty: bool,

    /// Latest status notice, if any.
    pub status: Option<StatusMessage>,

    /// Location of the list file.
    pub location: String,
}

impl RenderSnapshot {
    /// Position of the selected item within `rows`, if it is visible.
    #[must_use]
    pub fn selected_row(&self) -> Option<usize> {
        let selected = self.selected?;
        self.rows.iter().position(|row| row.index == selected)
    }
}
