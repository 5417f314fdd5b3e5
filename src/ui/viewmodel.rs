//! View model types representing renderable UI state.
//!
//! A [`UIViewModel`] is computed from a [`RenderSnapshot`] for a given
//! terminal size. It holds display-ready data only: the visible window of
//! rows, highlight ranges, and header, footer, and status text. No business
//! logic happens past this point.
//!
//! # Example
//!
//! ```rust
//! use justlists::app::{InteractionEngine, LogicalKey};
//! use justlists::storage::{ListStore, TextFileStorage};
//! use justlists::ui::viewmodel::compute_viewmodel;
//!
//! let mut store = ListStore::new(Box::new(TextFileStorage::new("/tmp/vm.list")));
//! let mut engine = InteractionEngine::new(&store);
//! engine.handle_key(&mut store, LogicalKey::Add)?;
//!
//! let vm = compute_viewmodel(&engine.snapshot(&store), 24, 80);
//! assert_eq!(vm.display_items.len(), 1);
//! assert!(vm.display_items[0].is_editing);
//! # Ok::<(), justlists::JustlistsError>(())
//! ```

use crate::app::{ModeKind, RenderSnapshot, SnapshotRow, StatusLevel};
use crate::infrastructure::paths::strip_host_prefix;

/// Lines taken by chrome in every mode: blank, header, border, status,
/// border, footer.
const BASE_CHROME_LINES: usize = 6;

/// Extra lines taken by the filter bar.
const FILTER_BAR_LINES: usize = 3;

/// Screen row of the first list line: blank, header, and border come first.
const LIST_TOP_ROW: usize = 4;

/// Gap between the row number column and the item text.
const NUMBER_GAP: usize = 2;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Rows inside the visible window, in display order.
    pub display_items: Vec<DisplayItem>,

    /// Position of the selected row within `display_items`, if visible.
    pub selected_index: Option<usize>,

    /// Width of the row number column.
    pub number_width: usize,

    /// 1-based screen row the first entry of `display_items` is drawn on.
    pub first_row: usize,

    pub header: HeaderInfo,
    pub footer: FooterInfo,

    /// Shown in place of rows when there are none.
    pub empty_state: Option<EmptyState>,

    /// Present while Filtering, and dimmed afterwards while a pattern is kept.
    pub filter_bar: Option<FilterBarInfo>,

    /// Line between the list and the footer: the exit prompt or a status message.
    pub status: Option<StatusLine>,
}

impl UIViewModel {
    /// Full-list index of the item drawn on screen row `row` (1-based).
    ///
    /// Rows above or below the visible window map to `None`.
    #[must_use]
    pub fn item_at_row(&self, row: usize) -> Option<usize> {
        let offset = row.checked_sub(self.first_row)?;
        self.display_items.get(offset).map(|item| item.number - 1)
    }
}

/// Display information for a single list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// 1-based position in the full list.
    pub number: usize,

    /// Item text, or the edit buffer for the row being edited.
    pub text: String,

    pub is_selected: bool,

    /// Whether `text` is a live edit buffer.
    pub is_editing: bool,

    /// Character ranges of filter matches, `(start, end)` with exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// Unsaved changes marker.
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    pub pattern: String,

    /// `false` once Filtering is left; the pattern is then shown for reference.
    pub active: bool,
}

/// Tone of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

/// Computes the view model for a `rows` x `cols` pane.
///
/// The visible window is centered on the selection where possible and
/// pinned to the end of the list otherwise, so the pane never shows a
/// partial page when there are enough rows to fill it.
#[must_use]
pub fn compute_viewmodel(snapshot: &RenderSnapshot, rows: usize, cols: usize) -> UIViewModel {
    let filtering = snapshot.mode == ModeKind::Filtering;
    let show_filter_bar = filtering || !snapshot.filter_pattern.is_empty();
    let available_rows = calculate_available_rows(rows, show_filter_bar);

    let selected_row = snapshot.selected_row();
    let anchor = selected_row.unwrap_or(0);

    let mut visible_start = anchor.saturating_sub(available_rows / 2);
    let visible_end = (visible_start + available_rows).min(snapshot.rows.len());

    if visible_end - visible_start < available_rows && snapshot.rows.len() >= available_rows {
        visible_start = visible_end.saturating_sub(available_rows);
    }

    let number_width = snapshot.total.max(1).to_string().len();
    let text_width = cols.saturating_sub(number_width + NUMBER_GAP + 1);
    let pattern = filtering.then_some(snapshot.filter_pattern.as_str());

    let display_items = snapshot.rows[visible_start..visible_end]
        .iter()
        .map(|row| compute_display_item(snapshot, row, text_width, pattern))
        .collect();

    UIViewModel {
        display_items,
        selected_index: selected_row.map(|i| i - visible_start),
        number_width,
        first_row: LIST_TOP_ROW + if show_filter_bar { FILTER_BAR_LINES } else { 0 },
        header: compute_header(snapshot),
        footer: compute_footer(snapshot.mode),
        empty_state: compute_empty_state(snapshot),
        filter_bar: show_filter_bar.then(|| FilterBarInfo {
            pattern: snapshot.filter_pattern.clone(),
            active: filtering,
        }),
        status: compute_status(snapshot),
    }
}

/// Rows left for the list once chrome is laid out. Always at least one.
fn calculate_available_rows(rows: usize, filter_bar: bool) -> usize {
    let chrome = BASE_CHROME_LINES + if filter_bar { FILTER_BAR_LINES } else { 0 };
    rows.saturating_sub(chrome).max(1)
}

fn compute_display_item(
    snapshot: &RenderSnapshot,
    row: &SnapshotRow,
    width: usize,
    pattern: Option<&str>,
) -> DisplayItem {
    let editing = snapshot.editing_index == Some(row.index);
    let source = match (&snapshot.edit_buffer, editing) {
        (Some(buffer), true) => buffer.as_str(),
        _ => row.text.as_str(),
    };

    let text = if editing {
        tail(source, width.saturating_sub(1))
    } else {
        truncate(source, width)
    };

    let highlight_ranges = match pattern {
        Some(p) if !editing => {
            let visible = text.chars().count();
            find_matches(&row.text, p)
                .into_iter()
                .filter(|&(start, _)| start < visible)
                .map(|(start, end)| (start, end.min(visible)))
                .collect()
        }
        _ => Vec::new(),
    };

    DisplayItem {
        number: row.index + 1,
        text,
        is_selected: snapshot.selected == Some(row.index),
        is_editing: editing,
        highlight_ranges,
    }
}

/// Character ranges of every non-overlapping occurrence of `pattern`.
///
/// # Example
///
/// ```rust
/// use justlists::ui::viewmodel::find_matches;
///
/// assert_eq!(find_matches("apple banana", "an"), vec![(7, 9), (9, 11)]);
/// assert!(find_matches("apple", "").is_empty());
/// ```
#[must_use]
pub fn find_matches(text: &str, pattern: &str) -> Vec<(usize, usize)> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let pattern_chars = pattern.chars().count();
    text.match_indices(pattern)
        .map(|(byte_idx, _)| {
            let start = text[..byte_idx].chars().count();
            (start, start + pattern_chars)
        })
        .collect()
}

/// Cuts `text` to `width` characters, marking the cut with `...`.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Keeps the last `width` characters so the cursor end of a buffer stays visible.
fn tail(text: &str, width: usize) -> String {
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(width)).collect()
}

fn compute_header(snapshot: &RenderSnapshot) -> HeaderInfo {
    let location = strip_host_prefix(&snapshot.location);
    let count = if snapshot.mode == ModeKind::Filtering {
        format!("{}/{}", snapshot.rows.len(), snapshot.total)
    } else {
        snapshot.total.to_string()
    };

    HeaderInfo {
        title: format!(" {location} ({count}) [{}] ", snapshot.mode.label()),
        dirty: snapshot.dirty,
    }
}

fn compute_footer(mode: ModeKind) -> FooterInfo {
    let keybindings = match mode {
        ModeKind::Browsing => {
            "j/k: move  h/l: first/last  a: add  e: edit  d: delete  f: filter  s: save  q: exit"
        }
        ModeKind::Filtering => "Type to filter  Backspace: erase  Enter/ESC: done  Ctrl+x: exit",
        ModeKind::Editing => "Type to edit  Backspace: erase  Enter: commit  ESC: cancel",
        ModeKind::ExitConfirm => "Enter/y: exit  s: save and exit  ESC/n: cancel",
    };

    FooterInfo {
        keybindings: keybindings.to_string(),
    }
}

fn compute_empty_state(snapshot: &RenderSnapshot) -> Option<EmptyState> {
    if !snapshot.rows.is_empty() {
        return None;
    }

    let (message, subtitle) = if snapshot.mode == ModeKind::Filtering && snapshot.total > 0 {
        (
            format!("No items contain \"{}\"", snapshot.filter_pattern),
            "Backspace to widen the filter",
        )
    } else {
        ("The list is empty".to_string(), "Press 'a' to add an item")
    };

    Some(EmptyState {
        message,
        subtitle: subtitle.to_string(),
    })
}

fn compute_status(snapshot: &RenderSnapshot) -> Option<StatusLine> {
    let status = snapshot.status.as_ref().map(|status| StatusLine {
        text: status.text.clone(),
        tone: match status.level {
            StatusLevel::Info => StatusTone::Info,
            StatusLevel::Error => StatusTone::Error,
        },
    });

    // A failed save-and-exit keeps the prompt open; the error wins the line.
    match status {
        Some(line) if line.tone == StatusTone::Error => Some(line),
        _ if snapshot.mode == ModeKind::ExitConfirm => Some(StatusLine {
            text: "There are unsaved changes. Exit anyway?".to_string(),
            tone: StatusTone::Warning,
        }),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::StatusMessage;

    fn snapshot(mode: ModeKind, items: &[&str], selected: Option<usize>) -> RenderSnapshot {
        RenderSnapshot {
            mode,
            rows: items
                .iter()
                .enumerate()
                .map(|(index, text)| SnapshotRow {
                    index,
                    text: (*text).to_string(),
                })
                .collect(),
            total: items.len(),
            selected,
            filter_pattern: String::new(),
            edit_buffer: None,
            editing_index: None,
            dirty: false,
            status: None,
            location: "/host/list.list".to_string(),
        }
    }

    #[test]
    fn window_centers_on_selection() {
        let items: Vec<String> = (0..50).map(|i| format!("item {i}")).collect();
        let refs: Vec<&str> = items.iter().map(String::as_str).collect();
        let vm = compute_viewmodel(&snapshot(ModeKind::Browsing, &refs, Some(25)), 16, 80);

        assert_eq!(vm.display_items.len(), 10);
        assert_eq!(vm.display_items[0].number, 21);
        assert_eq!(vm.selected_index, Some(5));
        assert!(vm.display_items[5].is_selected);
    }

    #[test]
    fn window_pins_to_end_of_list() {
        let items: Vec<String> = (0..50).map(|i| format!("item {i}")).collect();
        let refs: Vec<&str> = items.iter().map(String::as_str).collect();
        let vm = compute_viewmodel(&snapshot(ModeKind::Browsing, &refs, Some(49)), 16, 80);

        assert_eq!(vm.display_items.len(), 10);
        assert_eq!(vm.display_items[0].number, 41);
        assert_eq!(vm.selected_index, Some(9));
    }

    #[test]
    fn header_shows_location_count_and_mode() {
        let mut snap = snapshot(ModeKind::Browsing, &["a", "b"], Some(0));
        snap.dirty = true;
        let vm = compute_viewmodel(&snap, 24, 80);

        assert_eq!(vm.header.title, " ~/list.list (2) [LIST] ");
        assert!(vm.header.dirty);
    }

    #[test]
    fn filtering_highlights_every_occurrence() {
        let mut snap = snapshot(ModeKind::Filtering, &["banana"], Some(0));
        snap.filter_pattern = "an".to_string();
        snap.total = 3;
        let vm = compute_viewmodel(&snap, 24, 80);

        assert_eq!(vm.display_items[0].highlight_ranges, vec![(1, 3), (3, 5)]);
        assert_eq!(vm.header.title, " ~/list.list (1/3) [FILTER] ");
        assert_eq!(
            vm.filter_bar,
            Some(FilterBarInfo {
                pattern: "an".to_string(),
                active: true
            })
        );
    }

    #[test]
    fn last_pattern_stays_visible_but_inactive() {
        let mut snap = snapshot(ModeKind::Browsing, &["banana", "kiwi"], Some(0));
        snap.filter_pattern = "an".to_string();
        let vm = compute_viewmodel(&snap, 24, 80);

        assert_eq!(vm.filter_bar.map(|f| f.active), Some(false));
        assert_eq!(vm.display_items.len(), 2);
        assert!(vm.display_items[0].highlight_ranges.is_empty());
    }

    #[test]
    fn highlights_use_character_positions() {
        assert_eq!(find_matches("café café", "é"), vec![(3, 4), (8, 9)]);
    }

    #[test]
    fn editing_row_shows_buffer() {
        let mut snap = snapshot(ModeKind::Editing, &["old", "other"], Some(0));
        snap.edit_buffer = Some("new".to_string());
        snap.editing_index = Some(0);
        let vm = compute_viewmodel(&snap, 24, 80);

        assert_eq!(vm.display_items[0].text, "new");
        assert!(vm.display_items[0].is_editing);
        assert!(!vm.display_items[1].is_editing);
    }

    #[test]
    fn long_items_are_truncated() {
        let long = "x".repeat(100);
        let vm = compute_viewmodel(&snapshot(ModeKind::Browsing, &[&long], Some(0)), 24, 40);
        let text = &vm.display_items[0].text;

        assert_eq!(text.chars().count(), 40 - 1 - NUMBER_GAP - 1);
        assert!(text.ends_with("..."));
    }

    #[test]
    fn empty_states() {
        let vm = compute_viewmodel(&snapshot(ModeKind::Browsing, &[], None), 24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("The list is empty".to_string()));

        let mut snap = snapshot(ModeKind::Filtering, &[], Some(0));
        snap.total = 2;
        snap.filter_pattern = "zz".to_string();
        let vm = compute_viewmodel(&snap, 24, 80);
        assert_eq!(
            vm.empty_state.map(|e| e.message),
            Some("No items contain \"zz\"".to_string())
        );
        assert_eq!(vm.selected_index, None);
    }

    #[test]
    fn exit_prompt_replaces_info_status() {
        let mut snap = snapshot(ModeKind::ExitConfirm, &["a"], Some(0));
        snap.status = Some(StatusMessage::info("Saved"));
        let vm = compute_viewmodel(&snap, 24, 80);

        assert_eq!(vm.status.map(|s| s.tone), Some(StatusTone::Warning));
    }

    #[test]
    fn failed_save_stays_visible_under_exit_prompt() {
        let mut snap = snapshot(ModeKind::ExitConfirm, &["a"], Some(0));
        snap.status = Some(StatusMessage::error("Save failed: read-only"));
        let vm = compute_viewmodel(&snap, 24, 80);

        assert_eq!(
            vm.status,
            Some(StatusLine {
                text: "Save failed: read-only".to_string(),
                tone: StatusTone::Error
            })
        );
        assert!(vm.footer.keybindings.contains("save and exit"));
    }

    #[test]
    fn rows_map_back_to_list_indices() {
        let items: Vec<String> = (0..50).map(|i| format!("item {i}")).collect();
        let refs: Vec<&str> = items.iter().map(String::as_str).collect();
        let vm = compute_viewmodel(&snapshot(ModeKind::Browsing, &refs, Some(25)), 16, 80);

        assert_eq!(vm.first_row, 4);
        assert_eq!(vm.item_at_row(4), Some(20));
        assert_eq!(vm.item_at_row(9), Some(25));
        assert_eq!(vm.item_at_row(3), None);
        assert_eq!(vm.item_at_row(14), None);
    }

    #[test]
    fn filter_bar_pushes_rows_down() {
        let mut snap = snapshot(ModeKind::Browsing, &["apple", "banana"], Some(0));
        snap.filter_pattern = "an".to_string();
        let vm = compute_viewmodel(&snap, 24, 80);

        assert_eq!(vm.first_row, 7);
        assert_eq!(vm.item_at_row(8), Some(1));
    }

    #[test]
    fn empty_list_has_no_clickable_rows() {
        let vm = compute_viewmodel(&snapshot(ModeKind::Browsing, &[], None), 24, 80);
        assert_eq!(vm.item_at_row(vm.first_row), None);
    }

    #[test]
    fn save_errors_are_shown() {
        let mut snap = snapshot(ModeKind::Browsing, &["a"], Some(0));
        snap.status = Some(StatusMessage::error("Save failed"));
        let vm = compute_viewmodel(&snap, 24, 80);

        assert_eq!(
            vm.status,
            Some(StatusLine {
                text: "Save failed".to_string(),
                tone: StatusTone::Error
            })
        );
    }
}
