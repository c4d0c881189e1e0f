//! Error handling and edge case tests.

use noticeboard::{AnnouncementStore, StoreConfig, StoreError};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> StoreConfig {
    StoreConfig {
        path: dir.path().join("announcements"),
        latency: Duration::ZERO,
    }
}

#[tokio::test]
async fn corrupted_slot_surfaces_deserialization_error() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let store = AnnouncementStore::open(config.clone()).unwrap();
    store.seed_if_empty();

    // Corrupt the slot behind the store's back.
    fs::write(config.path.join("announcements"), "not json at all").unwrap();

    let result = store.list().await;
    assert!(matches!(result, Err(StoreError::Deserialization(_))));
}

#[tokio::test]
async fn seeding_over_corrupted_slot_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let store = AnnouncementStore::open(config.clone()).unwrap();

    fs::write(config.path.join("announcements"), "{broken").unwrap();

    // The slot holds a value, so the seed must not overwrite it; the
    // failure surfaces on read instead.
    store.seed_if_empty();
    assert!(store.list().await.is_err());
}

#[test]
fn second_store_on_same_directory_is_locked_out() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    let _store = AnnouncementStore::open(config.clone()).unwrap();
    let result = AnnouncementStore::open(config);
    assert!(matches!(result, Err(StoreError::Locked)));
}
