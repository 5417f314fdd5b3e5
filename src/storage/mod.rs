//! Storage layer for the persisted list.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `text`: Line-oriented text file implementation
//! - `list_store`: The owned item sequence with dirty tracking

pub mod backend;
pub mod list_store;
pub mod text;

pub use backend::Storage;
pub use list_store::ListStore;
pub use text::TextFileStorage;
