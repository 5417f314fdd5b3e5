//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over where the list
//! is persisted. [`ListStore`](crate::storage::ListStore) is the only caller;
//! backends know nothing about modes, selection, or filtering.

use crate::domain::error::Result;
use crate::domain::Item;

/// Abstraction over persistent list storage.
///
/// # Implementations
///
/// - [`TextFileStorage`](crate::storage::TextFileStorage): one item per line in a UTF-8 file
///
/// # Examples
///
/// ```no_run
/// use justlists::storage::{Storage, TextFileStorage};
///
/// let storage = TextFileStorage::new("/tmp/list.list");
/// let items = storage.load()?;
/// # Ok::<(), justlists::JustlistsError>(())
/// ```
pub trait Storage: Send {
    /// Reads every persisted item in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`JustlistsError::StoreUnavailable`](crate::JustlistsError::StoreUnavailable)
    /// if the store is absent or unreadable.
    fn load(&self) -> Result<Vec<Item>>;

    /// Replaces the persisted contents with `items`.
    ///
    /// A failed save must leave a previously good store readable.
    ///
    /// # Errors
    ///
    /// Returns [`JustlistsError::StoreWriteFailed`](crate::JustlistsError::StoreWriteFailed)
    /// if the write does not complete.
    fn save(&mut self, items: &[Item]) -> Result<()>;

    /// Human-readable location of the store, used in logs and the header.
    fn location(&self) -> String;
}
