//! Integration tests for the session store over the file medium.
//!
//! The unit tests cover each piece in isolation; these verify the
//! property the whole crate exists for — a session written by one
//! process incarnation is readable by the next, and a damaged medium
//! degrades to "no stored session" instead of failing the caller.

use chrono::{DateTime, Utc};
use connectify_storage::{FileMedium, SessionStore, TOKEN_KEY};

#[test]
fn test_session_survives_a_simulated_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.json");

    // First "page load": save a session.
    {
        let store = SessionStore::new(FileMedium::new(&path));
        store.save_token("token-before-reload");
        store.touch_activity_at(DateTime::from_timestamp_millis(1_700_000_000_000).unwrap());
    }

    // Second "page load": a fresh store over the same file sees it all.
    let store = SessionStore::new(FileMedium::new(&path));
    assert_eq!(store.load_token().as_deref(), Some("token-before-reload"));
    assert_eq!(
        store.last_activity(),
        DateTime::from_timestamp_millis(1_700_000_000_000).unwrap()
    );
}

#[test]
fn test_clear_token_survives_a_simulated_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.json");

    {
        let store = SessionStore::new(FileMedium::new(&path));
        store.save_token("short-lived");
        store.clear_token();
    }

    let store = SessionStore::new(FileMedium::new(&path));
    assert_eq!(store.load_token(), None);
}

#[test]
fn test_corrupt_session_file_reads_as_logged_out() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    std::fs::write(&path, b"=== definitely not a json map ===").expect("write");

    let store = SessionStore::new(FileMedium::new(&path));
    assert_eq!(store.load_token(), None);
    assert_eq!(store.last_activity(), DateTime::<Utc>::UNIX_EPOCH);

    // And the store recovers: the next save replaces the damaged file.
    store.save_token("fresh-token");
    assert_eq!(store.load_token().as_deref(), Some("fresh-token"));
}

#[test]
fn test_token_and_activity_share_one_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.json");

    let medium = FileMedium::new(&path);
    let store = SessionStore::new(medium.clone());
    store.save_token("t");
    store.touch_activity();

    // Both keys land in the same JSON map.
    let raw = std::fs::read_to_string(&path).expect("file exists");
    let map: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(map[TOKEN_KEY], "t");
    assert!(map["last_activity"].is_string());
}
