//! The interaction engine: mode, selection, and command application.
//!
//! [`InteractionEngine`] is the only component that touches the state
//! machine. It owns the current [`Mode`], the selection, the filtered view,
//! and the status line. The [`ListStore`] is a sibling passed in explicitly on
//! every call, never captured.
//!
//! # Dispatch
//!
//! For each key, [`InteractionEngine::handle_key`]:
//!
//! 1. Checks the engine invariants and fails with
//!    [`JustlistsError::CorruptState`] if any is violated
//! 2. Looks the (mode, key) pair up in the transition table
//! 3. Applies the returned commands in order
//! 4. Enters the next mode
//!
//! A failed `Persist` stops at step 3: later commands are skipped and the
//! mode is left as it was.
//!
//! # Example
//!
//! ```rust
//! use justlists::app::{InteractionEngine, LogicalKey, ModeKind, Outcome};
//! use justlists::storage::{ListStore, TextFileStorage};
//!
//! let mut store = ListStore::new(Box::new(TextFileStorage::new("/tmp/doc.list")));
//! let mut engine = InteractionEngine::new(&store);
//!
//! assert_eq!(engine.handle_key(&mut store, LogicalKey::Add)?, Outcome::Updated);
//! assert_eq!(engine.snapshot(&store).mode, ModeKind::Editing);
//! # Ok::<(), justlists::JustlistsError>(())
//! ```

use super::actions::Command;
use super::filter::FilteredView;
use super::handler::{self, Context};
use super::modes::{LogicalKey, Mode};
use super::snapshot::{RenderSnapshot, SnapshotRow, StatusMessage};
use crate::domain::error::{JustlistsError, Result};
use crate::domain::Item;
use crate::storage::ListStore;

/// What happened to a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing is bound to the key in the current mode.
    Ignored,
    /// State changed; the driver should re-render.
    Updated,
    /// The session should end. Call [`InteractionEngine::shutdown`] next.
    Terminate,
}

/// Owner of the interaction state machine.
#[derive(Debug, Clone, Default)]
pub struct InteractionEngine {
    mode: Mode,
    selection: Option<usize>,
    view: FilteredView,
    status: Option<StatusMessage>,
    terminating: bool,
    shut_down: bool,
}

impl InteractionEngine {
    /// Creates an engine in `Browsing` with the first item selected, or no
    /// selection if the list is empty.
    #[must_use]
    pub fn new(store: &ListStore) -> Self {
        Self {
            selection: (!store.is_empty()).then_some(0),
            ..Self::default()
        }
    }

    /// Processes one logical key.
    ///
    /// # Errors
    ///
    /// - [`JustlistsError::StoreWriteFailed`] if a save requested by the key
    ///   fails. Recoverable; nothing else changed.
    /// - [`JustlistsError::CorruptState`] if the engine's invariants do not hold.
    ///   Fatal; the driver must terminate.
    pub fn handle_key(&mut self, store: &mut ListStore, key: LogicalKey) -> Result<Outcome> {
        let _span = tracing::debug_span!("handle_key",
            key = ?key,
            mode = ?self.mode.kind()
        ).entered();

        if self.terminating {
            tracing::debug!("session is terminating, ignoring key");
            return Ok(Outcome::Ignored);
        }

        self.check_invariants(store)?;

        let ctx = Context {
            len: store.len(),
            selection: self.selection,
            dirty: store.is_dirty(),
            selected_text: self
                .selection
                .and_then(|i| store.get(i))
                .map(Item::as_str),
        };

        let Some(transition) = handler::transition(&self.mode, key, &ctx) else {
            tracing::trace!("no action bound");
            return Ok(Outcome::Ignored);
        };

        self.status = None;

        for command in transition.commands {
            self.apply(store, command)?;
        }

        if self.mode.kind() != transition.next.kind() {
            tracing::debug!(from = ?self.mode.kind(), to = ?transition.next.kind(), "mode changed");
        }
        self.mode = transition.next;

        Ok(if self.terminating {
            Outcome::Terminate
        } else {
            Outcome::Updated
        })
    }

    fn apply(&mut self, store: &mut ListStore, command: Command) -> Result<()> {
        tracing::trace!(command = ?command, "applying command");

        match command {
            Command::Append(text) => {
                let index = store.append(Item::new(text));
                tracing::debug!(index, "item appended");
            }
            Command::Replace { index, text } => {
                if !store.replace(index, Item::new(text)) {
                    return Err(JustlistsError::CorruptState(format!(
                        "replace target {index} outside list of {}",
                        store.len()
                    )));
                }
                tracing::debug!(index, "item replaced");
            }
            Command::Remove(index) => {
                if store.remove(index).is_none() {
                    return Err(JustlistsError::CorruptState(format!(
                        "remove target {index} outside list of {}",
                        store.len()
                    )));
                }
                tracing::debug!(index, remaining = store.len(), "item removed");
            }
            Command::Select(selection) => {
                self.selection = selection;
            }
            Command::ApplyFilter(pattern) => {
                self.view.apply(store.items(), &pattern);
                tracing::trace!(
                    pattern = %pattern,
                    matches = self.view.indices().len(),
                    "filter applied"
                );
            }
            Command::Persist => self.persist(store)?,
            Command::Terminate => {
                tracing::debug!(dirty = store.is_dirty(), "termination requested");
                self.terminating = true;
            }
        }

        Ok(())
    }

    fn persist(&mut self, store: &mut ListStore) -> Result<()> {
        match store.save() {
            Ok(()) => {
                tracing::info!(count = store.len(), location = %store.location(), "list saved");
                self.status = Some(StatusMessage::info(format!(
                    "Saved {} item(s) to {}",
                    store.len(),
                    store.location()
                )));
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "save failed");
                self.status = Some(StatusMessage::error(format!("Save failed: {e}")));
                Err(e)
            }
        }
    }

    /// Verifies that the engine state is one the transition table can handle.
    fn check_invariants(&self, store: &ListStore) -> Result<()> {
        let len = store.len();

        match self.selection {
            Some(i) if i >= len => {
                return Err(self.corrupt(format!("selection {i} outside list of {len}")));
            }
            None if len > 0 => {
                return Err(self.corrupt(format!("no selection in non-empty list of {len}")));
            }
            _ => {}
        }

        if let Mode::Editing { target_index, .. } = self.mode {
            if target_index >= len {
                return Err(self.corrupt(format!(
                    "editing target {target_index} outside list of {len}"
                )));
            }
        }

        Ok(())
    }

    fn corrupt(&self, detail: String) -> JustlistsError {
        tracing::error!(mode = ?self.mode, selection = ?self.selection, detail = %detail, "engine invariant violated");
        JustlistsError::CorruptState(detail)
    }

    /// Performs the final save at normal termination.
    ///
    /// Saves unconditionally, whatever the dirty flag says. Runs at most once;
    /// later calls return `Ok(())` without touching the store. After this the
    /// engine ignores all keys.
    ///
    /// # Errors
    ///
    /// Returns [`JustlistsError::StoreWriteFailed`] if the final save fails.
    pub fn shutdown(&mut self, store: &mut ListStore) -> Result<()> {
        if self.shut_down {
            return Ok(());
        }
        self.shut_down = true;
        self.terminating = true;

        let _span = tracing::debug_span!("shutdown", dirty = store.is_dirty()).entered();
        store.save()?;
        tracing::info!(count = store.len(), location = %store.location(), "final save complete");
        Ok(())
    }

    /// Replaces the status line, e.g. to report a store that could not be read.
    pub fn notify(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    #[must_use]
    pub const fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Current filtered view. Only meaningful while Filtering.
    #[must_use]
    pub const fn filtered_view(&self) -> &FilteredView {
        &self.view
    }

    #[must_use]
    pub const fn is_terminating(&self) -> bool {
        self.terminating
    }

    /// Builds the read-only snapshot for the next frame.
    #[must_use]
    pub fn snapshot(&self, store: &ListStore) -> RenderSnapshot {
        let row = |index: usize| {
            store.get(index).map(|item| SnapshotRow {
                index,
                text: item.as_str().to_string(),
            })
        };

        let rows: Vec<SnapshotRow> = match &self.mode {
            Mode::Filtering { .. } => self.view.indices().iter().copied().filter_map(row).collect(),
            _ => (0..store.len()).filter_map(row).collect(),
        };

        let (edit_buffer, editing_index) = match &self.mode {
            Mode::Editing { target_index, buffer } => (Some(buffer.clone()), Some(*target_index)),
            _ => (None, None),
        };

        let filter_pattern = match &self.mode {
            Mode::Filtering { pattern } => pattern.clone(),
            _ => self.view.pattern().to_string(),
        };

        RenderSnapshot {
            mode: self.mode.kind(),
            rows,
            total: store.len(),
            selected: self.selection,
            filter_pattern,
            edit_buffer,
            editing_index,
            dirty: store.is_dirty(),
            status: self.status.clone(),
            location: store.location(),
        }
    }

    #[cfg(test)]
    fn force_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::TextFileStorage;

    fn store_with(dir: &tempfile::TempDir, items: &[&str]) -> ListStore {
        let mut store = ListStore::new(Box::new(TextFileStorage::new(dir.path().join("t.list"))));
        for item in items {
            store.append(Item::new(*item));
        }
        store
    }

    #[test]
    fn corrupt_editing_target_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&dir, &["only"]);
        let mut engine = InteractionEngine::new(&store);
        engine.force_mode(Mode::Editing { target_index: 5, buffer: String::new() });

        let err = engine.handle_key(&mut store, LogicalKey::Confirm).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(store.items(), &[Item::new("only")]);
    }

    #[test]
    fn out_of_range_selection_is_fatal_even_for_unbound_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&dir, &[]);
        let mut engine = InteractionEngine::new(&store);
        engine.selection = Some(0);

        let err = engine.handle_key(&mut store, LogicalKey::Input('z')).unwrap_err();
        assert!(matches!(err, JustlistsError::CorruptState(_)));
    }

    #[test]
    fn keys_after_termination_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&dir, &[]);
        let mut engine = InteractionEngine::new(&store);

        assert_eq!(engine.handle_key(&mut store, LogicalKey::Exit).unwrap(), Outcome::Terminate);
        assert_eq!(engine.handle_key(&mut store, LogicalKey::Add).unwrap(), Outcome::Ignored);
        assert!(store.is_empty());
    }
}
