//! Plain-text file storage backend.
//!
//! The list file holds one item per line, UTF-8, with a line terminator after
//! every item including the last. Invalid UTF-8 is read lossily rather than
//! rejected, so a stray byte never empties the list. There is no header and no escaping. Writes
//! go to a sibling temporary file which is then renamed over the target, so a
//! failed write never leaves a half-written list behind.
//!
//! # File Format
//!
//! ```text
//! milk
//! bread
//! eggs
//! ```

use crate::domain::error::{JustlistsError, Result};
use crate::domain::Item;
use crate::storage::backend::Storage;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Line-oriented text file backend.
#[derive(Debug, Clone)]
pub struct TextFileStorage {
    file_path: PathBuf,
}

impl TextFileStorage {
    /// Creates a backend for `file_path`. No I/O happens until `load` or `save`.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Returns the path of the list file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Serializes items into the on-disk representation.
    #[must_use]
    pub fn encode(items: &[Item]) -> String {
        let capacity = items.iter().map(|i| i.as_str().len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for item in items {
            out.push_str(item.as_str());
            out.push('\n');
        }
        out
    }

    /// Parses the on-disk representation. Empty lines are dropped.
    #[must_use]
    pub fn decode(contents: &str) -> Vec<Item> {
        contents
            .lines()
            .filter(|line| !line.is_empty())
            .map(Item::new)
            .collect()
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }

    fn write_atomically(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.tmp_path();
        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        if let Err(e) = fs::write(&tmp_path, contents) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        tracing::trace!("renaming temporary file to final location");
        let renamed = fs::rename(&tmp_path, &self.file_path);
        if renamed.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        renamed
    }
}

impl Storage for TextFileStorage {
    fn load(&self) -> Result<Vec<Item>> {
        let _span = tracing::debug_span!("text_load", path = ?self.file_path).entered();

        let bytes = fs::read(&self.file_path).map_err(|source| {
            JustlistsError::StoreUnavailable {
                path: self.location(),
                source,
            }
        })?;

        let contents = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = contents {
            tracing::warn!("list file is not valid UTF-8, invalid bytes replaced");
        }

        let items = Self::decode(&contents);
        tracing::debug!(count = items.len(), "list file loaded");
        Ok(items)
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        let _span = tracing::debug_span!("text_save",
            path = ?self.file_path,
            count = items.len()
        ).entered();

        let contents = Self::encode(items);
        self.write_atomically(&contents)
            .map_err(|source| JustlistsError::StoreWriteFailed {
                path: self.location(),
                source,
            })?;

        tracing::debug!(bytes = contents.len(), "list file saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.file_path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_terminates_every_item() {
        let items = vec![Item::new("a"), Item::new("b")];
        assert_eq!(TextFileStorage::encode(&items), "a\nb\n");
        assert_eq!(TextFileStorage::encode(&[]), "");
    }

    #[test]
    fn decode_drops_blank_lines() {
        let items = TextFileStorage::decode("a\n\nb\r\n\n");
        assert_eq!(items, vec![Item::new("a"), Item::new("b")]);
    }

    #[test]
    fn load_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.list");
        fs::write(&path, b"milk\ncaf\xe9\nbread\n").unwrap();

        let items = TextFileStorage::new(&path).load().unwrap();
        assert_eq!(
            items,
            vec![Item::new("milk"), Item::new("caf\u{fffd}"), Item::new("bread")]
        );
    }

    #[test]
    fn tmp_path_is_a_sibling() {
        let storage = TextFileStorage::new("/host/list.list");
        assert_eq!(storage.tmp_path(), PathBuf::from("/host/list.list.tmp"));
    }
}
