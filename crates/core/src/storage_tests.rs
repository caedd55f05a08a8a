// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
struct TestPrefs {
    theme: String,
    compact: bool,
}

fn store() -> (TempDir, PreferenceStore) {
    let dir = TempDir::new().unwrap();
    let store = PreferenceStore::open(dir.path());
    (dir, store)
}

#[test]
fn get_returns_default_for_missing_key() {
    let (_dir, store) = store();

    let prefs: TestPrefs = store.get("never-written");
    assert_eq!(prefs, TestPrefs::default());
}

#[test]
fn set_then_get_roundtrip() {
    let (_dir, store) = store();

    let prefs = TestPrefs {
        theme: "dark".into(),
        compact: true,
    };
    store.set("ui-prefs", &prefs).unwrap();

    let loaded: TestPrefs = store.get("ui-prefs");
    assert_eq!(loaded, prefs);
}

#[test]
fn set_overwrites_previous_value() {
    let (_dir, store) = store();

    store
        .set(
            "ui-prefs",
            &TestPrefs {
                theme: "dark".into(),
                compact: true,
            },
        )
        .unwrap();
    let replacement = TestPrefs {
        theme: "light".into(),
        compact: false,
    };
    store.set("ui-prefs", &replacement).unwrap();

    let loaded: TestPrefs = store.get("ui-prefs");
    assert_eq!(loaded, replacement);
}

#[test]
fn get_returns_default_for_corrupt_file() {
    let (dir, store) = store();

    std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();

    let prefs: TestPrefs = store.get("broken");
    assert_eq!(prefs, TestPrefs::default());
}

#[test]
fn set_creates_missing_root_directory() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("state");
    let store = PreferenceStore::open(&root);

    store
        .set(
            "ui-prefs",
            &TestPrefs {
                theme: "dark".into(),
                compact: false,
            },
        )
        .unwrap();

    assert!(root.join("ui-prefs.json").exists());
}

#[test]
fn keys_are_isolated_from_each_other() {
    let (_dir, store) = store();

    let mut map = BTreeMap::new();
    map.insert("production".to_string(), true);
    store.set("key-a", &map).unwrap();

    let other: BTreeMap<String, bool> = store.get("key-b");
    assert!(other.is_empty());
}

#[test]
fn state_dir_env_override_wins() {
    std::env::set_var(STATE_DIR_ENV, "/tmp/fathom-test-state");
    let resolved = default_state_dir().unwrap();
    std::env::remove_var(STATE_DIR_ENV);

    assert_eq!(resolved, PathBuf::from("/tmp/fathom-test-state"));
}
