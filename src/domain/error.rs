//! Error types for the justlists plugin.
//!
//! This module defines the centralized error type [`JustlistsError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Only [`JustlistsError::CorruptState`] is fatal. Every other variant is a
//! condition the caller reports and then carries on from.

use std::io;
use thiserror::Error;

/// The main error type for justlists operations.
///
/// # Examples
///
/// ```
/// use justlists::JustlistsError;
///
/// let err = JustlistsError::Config("list_file must not be empty".to_string());
/// assert!(!err.is_fatal());
/// ```
#[derive(Debug, Error)]
pub enum JustlistsError {
    /// The list file could not be read at startup.
    ///
    /// Recoverable: the caller proceeds with an empty list. A missing file is
    /// the normal first-run case and is reported through the same variant.
    #[error("list file {path} unavailable: {source}")]
    StoreUnavailable {
        /// Location of the list file.
        path: String,
        /// Underlying read failure.
        #[source]
        source: io::Error,
    },

    /// Writing the list file failed.
    ///
    /// Recoverable: the in-memory list and its dirty flag are left untouched so
    /// the user can retry the save.
    #[error("failed to write list file {path}: {source}")]
    StoreWriteFailed {
        /// Location of the list file.
        path: String,
        /// Underlying write failure.
        #[source]
        source: io::Error,
    },

    /// The interaction engine reached a state that violates its invariants.
    ///
    /// Fatal: the driver must stop dispatching input and terminate.
    #[error("interaction state corrupted: {0}")]
    CorruptState(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl JustlistsError {
    /// Returns `true` when the process must not continue after this error.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::CorruptState(_))
    }

    /// Returns `true` for a load failure caused by the list file simply not existing.
    #[must_use]
    pub fn is_missing_store(&self) -> bool {
        matches!(self, Self::StoreUnavailable { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// A specialized `Result` type for justlists operations.
pub type Result<T> = std::result::Result<T, JustlistsError>;
