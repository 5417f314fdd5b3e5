//! List item domain model.
//!
//! An [`Item`] is a single line of text. The only rule the core enforces is
//! that an item never contains a line terminator, because the list file uses
//! line terminators as its record separator.

use std::fmt;

/// A single line of text in the list.
///
/// Construction strips `\n` and `\r`, so every `Item` can be written to the
/// list file as exactly one record.
///
/// # Examples
///
/// ```
/// use justlists::Item;
///
/// let item = Item::new("milk\nand bread");
/// assert_eq!(item.as_str(), "milkand bread");
/// assert!(item.contains("and"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Item(String);

impl Item {
    /// Creates an item, dropping any line terminator characters.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if text.contains(['\n', '\r']) {
            text.retain(|c| c != '\n' && c != '\r');
        }
        Self(text)
    }

    /// Returns the item text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Literal, case-sensitive substring test. The empty pattern matches every item.
    #[must_use]
    pub fn contains(&self, pattern: &str) -> bool {
        self.0.contains(pattern)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_terminators() {
        assert_eq!(Item::new("a\r\nb\n").as_str(), "ab");
    }

    #[test]
    fn substring_is_case_sensitive() {
        let item = Item::new("Bread");
        assert!(item.contains("Bre"));
        assert!(!item.contains("bre"));
        assert!(item.contains(""));
    }
}
