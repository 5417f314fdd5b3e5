//! Filter projection over the full list.

use crate::domain::Item;

/// Ascending original indices of the items containing `pattern`.
///
/// Derived state: recomputed by [`FilteredView::apply`] on every pattern
/// change and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    pattern: String,
    indices: Vec<usize>,
}

impl FilteredView {
    /// Scans `items` once in index order, keeping those that contain
    /// `pattern` as a literal substring. The empty pattern keeps everything.
    pub fn apply(&mut self, items: &[Item], pattern: &str) {
        self.pattern.clear();
        self.pattern.push_str(pattern);
        self.indices = project(items, pattern);
    }

    /// Pattern the view was last computed for.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

/// Pure projection used by [`FilteredView::apply`].
#[must_use]
pub fn project(items: &[Item], pattern: &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.contains(pattern))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(texts: &[&str]) -> Vec<Item> {
        texts.iter().copied().map(Item::new).collect()
    }

    #[test]
    fn empty_pattern_keeps_all_in_order() {
        assert_eq!(project(&items(&["b", "a", "c"]), ""), vec![0, 1, 2]);
    }

    #[test]
    fn keeps_ascending_original_indices() {
        let list = items(&["milk", "bread", "eggs", "cheese"]);
        assert_eq!(project(&list, "e"), vec![1, 2, 3]);
        assert_eq!(project(&list, "ee"), vec![3]);
        assert!(project(&list, "E").is_empty());
    }

    #[test]
    fn view_remembers_pattern() {
        let mut view = FilteredView::default();
        view.apply(&items(&["milk", "bread"]), "r");
        assert_eq!(view.pattern(), "r");
        assert_eq!(view.indices(), &[1]);
    }
}
