//! Persistence behavior of `ListStore` over the text file backend.

use std::fs;
use std::path::Path;

use justlists::storage::{ListStore, TextFileStorage};
use justlists::{Item, JustlistsError};

fn store_at(path: &Path) -> ListStore {
    ListStore::new(Box::new(TextFileStorage::new(path)))
}

fn texts(store: &ListStore) -> Vec<&str> {
    store.items().iter().map(Item::as_str).collect()
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("groceries.list");

    let mut store = store_at(&path);
    for text in ["milk", "bread", "free-range eggs"] {
        store.append(Item::new(text));
    }
    store.save().unwrap();

    let mut reloaded = store_at(&path);
    assert_eq!(reloaded.load().unwrap(), 3);
    assert_eq!(texts(&reloaded), vec!["milk", "bread", "free-range eggs"]);
    assert!(!reloaded.is_dirty());
}

#[test]
fn every_item_gets_a_terminator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.list");

    let mut store = store_at(&path);
    store.append(Item::new("one"));
    store.append(Item::new("two"));
    store.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
}

#[test]
fn empty_lines_are_dropped_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.list");
    fs::write(&path, "\nmilk\n\n\nbread\n\n").unwrap();

    let mut store = store_at(&path);
    assert_eq!(store.load().unwrap(), 2);
    assert_eq!(texts(&store), vec!["milk", "bread"]);
}

#[test]
fn last_line_without_terminator_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.list");
    fs::write(&path, "milk\r\nbread").unwrap();

    let mut store = store_at(&path);
    store.load().unwrap();
    assert_eq!(texts(&store), vec!["milk", "bread"]);
}

#[test]
fn missing_file_is_unavailable_and_leaves_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(&dir.path().join("absent.list"));
    store.append(Item::new("stale"));

    let err = store.load().unwrap_err();
    assert!(matches!(err, JustlistsError::StoreUnavailable { .. }));
    assert!(err.is_missing_store());
    assert!(!err.is_fatal());
    assert!(store.is_empty());
    assert!(!store.is_dirty());
}

#[test]
fn mutations_set_dirty_and_save_clears_it() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(&dir.path().join("t.list"));
    assert!(!store.is_dirty());

    store.append(Item::new("a"));
    assert!(store.is_dirty());
    store.save().unwrap();
    assert!(!store.is_dirty());

    assert!(store.replace(0, Item::new("b")));
    assert!(store.is_dirty());
    store.save().unwrap();

    assert_eq!(store.remove(0), Some(Item::new("b")));
    assert!(store.is_dirty());
}

#[test]
fn out_of_range_mutations_change_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(&dir.path().join("t.list"));

    assert!(!store.replace(0, Item::new("x")));
    assert_eq!(store.remove(3), None);
    assert!(!store.is_dirty());
}

#[test]
fn failed_save_keeps_items_and_dirty_flag() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();

    let mut store = store_at(&blocker.join("t.list"));
    store.append(Item::new("keep me"));

    let err = store.save().unwrap_err();
    assert!(matches!(err, JustlistsError::StoreWriteFailed { .. }));
    assert!(store.is_dirty());
    assert_eq!(texts(&store), vec!["keep me"]);
}

#[test]
fn saving_twice_writes_identical_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.list");

    let mut store = store_at(&path);
    store.append(Item::new("milk"));
    store.save().unwrap();
    let first = fs::read(&path).unwrap();

    store.save().unwrap();
    assert_eq!(fs::read(&path).unwrap(), first);
    assert!(!dir.path().join("t.list.tmp").exists());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/deeper/t.list");

    let mut store = store_at(&path);
    store.append(Item::new("x"));
    store.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "x\n");
}

#[test]
fn invalid_utf8_loads_lossily_instead_of_failing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.list");
    fs::write(&path, b"milk\n\xff\xfe\nbread\n").unwrap();

    let mut store = store_at(&path);
    assert_eq!(store.load().unwrap(), 3);
    assert_eq!(texts(&store), vec!["milk", "\u{fffd}\u{fffd}", "bread"]);
    assert!(!store.is_dirty());
}
