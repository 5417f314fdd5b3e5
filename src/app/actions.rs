//! Commands produced by the transition table.
//!
//! The transition table never touches the list or the store itself. For each
//! handled key it returns a [`Transition`]: the next [`Mode`] plus an ordered
//! list of [`Command`]s that [`InteractionEngine`](crate::app::InteractionEngine)
//! applies one by one.
//!
//! # Example
//!
//! ```rust
//! use justlists::app::{Command, Mode, Transition};
//!
//! let t = Transition::to(Mode::Browsing).with(Command::Persist);
//! assert_eq!(t.commands, vec![Command::Persist]);
//! ```

use super::modes::Mode;

/// A single mutation or side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append an item with this text to the end of the list.
    Append(String),

    /// Overwrite the item at `index` with `text`.
    Replace {
        /// Index in the full list.
        index: usize,
        /// Replacement text.
        text: String,
    },

    /// Remove the item at this index.
    Remove(usize),

    /// Set the selection (`None` means no valid selection).
    Select(Option<usize>),

    /// Recompute the filtered view for this pattern.
    ApplyFilter(String),

    /// Write the list to the store.
    ///
    /// If this fails, the remaining commands and the mode change are dropped.
    Persist,

    /// End the session. The final save happens in
    /// [`InteractionEngine::shutdown`](crate::app::InteractionEngine::shutdown).
    Terminate,
}

/// Result of looking up a (mode, key) pair in the transition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Mode to enter once every command has been applied.
    pub next: Mode,
    /// Commands to apply, in order.
    pub commands: Vec<Command>,
}

impl Transition {
    /// A transition into `next` with no commands.
    #[must_use]
    pub const fn to(next: Mode) -> Self {
        Self {
            next,
            commands: Vec::new(),
        }
    }

    /// Appends a command.
    #[must_use]
    pub fn with(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// `true` if the transition requests termination.
    #[must_use]
    pub fn terminates(&self) -> bool {
        self.commands.contains(&Command::Terminate)
    }
}
