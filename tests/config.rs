//! Plugin configuration parsing and theme resolution.

use std::collections::BTreeMap;
use std::fs;

use justlists::{Config, JustlistsError};

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn empty_map_gives_defaults() {
    let config = Config::from_zellij(&BTreeMap::new()).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.list_file, "~/list.list");
    assert_eq!(config.list_path(), "/host/list.list");
}

#[test]
fn all_keys_are_read() {
    let config = Config::from_zellij(&map(&[
        ("list_file", " ~/todo.list "),
        ("theme", "paper-light"),
        ("theme_file", "~/themes/mine.toml"),
        ("trace_level", "debug"),
    ]))
    .unwrap();

    assert_eq!(config.list_file, "~/todo.list");
    assert_eq!(config.list_path(), "/host/todo.list");
    assert_eq!(config.theme_name.as_deref(), Some("paper-light"));
    assert_eq!(config.theme_file.as_deref(), Some("~/themes/mine.toml"));
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
}

#[test]
fn blank_list_file_is_rejected() {
    let err = Config::from_zellij(&map(&[("list_file", "  ")])).unwrap_err();
    assert!(matches!(err, JustlistsError::Config(_)));
}

#[test]
fn theme_resolution_order() {
    let named = Config {
        theme_name: Some("paper-light".to_string()),
        ..Config::default()
    };
    assert_eq!(named.resolve_theme().name, "paper-light");

    let unknown = Config {
        theme_name: Some("no-such-theme".to_string()),
        ..Config::default()
    };
    assert_eq!(unknown.resolve_theme().name, "ember-dark");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mine.toml");
    let custom = fs::read_to_string("themes/paper-light.toml")
        .unwrap()
        .replace("paper-light", "mine");
    fs::write(&path, custom).unwrap();

    let from_file = Config {
        theme_name: Some("paper-light".to_string()),
        theme_file: Some(path.display().to_string()),
        ..Config::default()
    };
    assert_eq!(from_file.resolve_theme().name, "mine");
}
