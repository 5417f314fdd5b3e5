//! The in-memory list and its persistence contract.
//!
//! [`ListStore`] owns the ordered item sequence for the whole plugin lifetime
//! and tracks whether it differs from what was last persisted. It is the only
//! component that talks to a [`Storage`] backend.
//!
//! # Dirty Tracking
//!
//! - Every successful `append`, `replace`, or `remove` sets `dirty`.
//! - Only a successful `save` clears it. A failed save leaves both the items
//!   and the flag exactly as they were.

use crate::domain::error::Result;
use crate::domain::Item;
use crate::storage::backend::Storage;

/// Ordered list of items backed by a [`Storage`] implementation.
pub struct ListStore {
    items: Vec<Item>,
    dirty: bool,
    backend: Box<dyn Storage>,
}

impl ListStore {
    /// Creates an empty, clean store over `backend`. Call [`load`](Self::load)
    /// to populate it.
    #[must_use]
    pub fn new(backend: Box<dyn Storage>) -> Self {
        Self {
            items: Vec::new(),
            dirty: false,
            backend,
        }
    }

    /// Replaces the in-memory list with the persisted one.
    ///
    /// Returns the number of items read. On failure the list is left empty and
    /// clean; the caller is expected to log the condition and carry on.
    ///
    /// # Errors
    ///
    /// Returns [`JustlistsError::StoreUnavailable`](crate::JustlistsError::StoreUnavailable)
    /// if the backend cannot be read.
    pub fn load(&mut self) -> Result<usize> {
        self.items.clear();
        self.dirty = false;

        let items = self.backend.load()?;
        self.items = items;
        Ok(self.items.len())
    }

    /// Persists the current list and clears the dirty flag on success.
    ///
    /// Writes regardless of the dirty flag, so calling it twice without an
    /// intervening mutation produces identical stored content.
    ///
    /// # Errors
    ///
    /// Returns [`JustlistsError::StoreWriteFailed`](crate::JustlistsError::StoreWriteFailed)
    /// on failure, in which case nothing in memory changes.
    pub fn save(&mut self) -> Result<()> {
        self.backend.save(&self.items)?;
        self.dirty = false;
        Ok(())
    }

    /// Appends an item and returns its index.
    pub fn append(&mut self, item: Item) -> usize {
        self.items.push(item);
        self.dirty = true;
        self.items.len() - 1
    }

    /// Replaces the item at `index`. Returns `false` (and changes nothing) if
    /// `index` is out of range.
    pub fn replace(&mut self, index: usize, item: Item) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the item at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Item> {
        if index >= self.items.len() {
            return None;
        }
        self.dirty = true;
        Some(self.items.remove(index))
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `true` iff the in-memory list differs from the last successful save.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Location of the backing store.
    #[must_use]
    pub fn location(&self) -> String {
        self.backend.location()
    }
}

impl std::fmt::Debug for ListStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListStore")
            .field("items", &self.items.len())
            .field("dirty", &self.dirty)
            .field("location", &self.backend.location())
            .finish()
    }
}
