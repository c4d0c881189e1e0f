//! File-backed key-value slot storage.
//!
//! One directory holds the persistence slots, one file per key. Writes
//! rewrite the whole slot atomically (temp file + rename), so a failed
//! write never leaves a partially written value behind. A `LOCK` file
//! gives each store instance exclusive ownership of its directory.

use crate::error::{Result, StoreError};
use fs2::FileExt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the exclusive-ownership lock file.
const LOCK_FILE: &str = "LOCK";

/// Key-value slot storage rooted at a single directory.
pub struct SlotStorage {
    /// Base directory for the slots.
    path: PathBuf,

    /// Lock file for exclusive access.
    _lock_file: File,
}

impl SlotStorage {
    /// Open the slot directory, creating it if missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        fs::create_dir_all(&path)?;

        let lock_file = Self::acquire_lock(&path)?;

        Ok(Self {
            path,
            _lock_file: lock_file,
        })
    }

    /// Read the value of a slot. Returns `None` if the slot was never written.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let slot = self.slot_path(key)?;
        if !slot.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&slot)?;
        debug!("read slot {} ({} bytes)", key, value.len());
        Ok(Some(value))
    }

    /// Write the whole value of a slot atomically.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let slot = self.slot_path(key)?;
        let tmp = self.path.join(format!("{key}.tmp"));

        let mut file = File::create(&tmp)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &slot)?;

        debug!("wrote slot {} ({} bytes)", key, value.len());
        Ok(())
    }

    /// Check whether a slot has ever been written.
    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.slot_path(key)?.exists())
    }

    /// Map a key to its slot file. Keys are restricted to characters that
    /// are safe as file names on every platform.
    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key != LOCK_FILE
            && key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-'));
        if !valid {
            return Err(StoreError::InvalidSlotKey(key.to_string()));
        }
        Ok(self.path.join(key))
    }

    fn acquire_lock(path: &Path) -> Result<File> {
        let lock_path = path.join(LOCK_FILE);
        let lock_file = File::create(lock_path)?;

        lock_file
            .try_lock_exclusive()
            .map_err(|_| StoreError::Locked)?;

        Ok(lock_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get() {
        let dir = TempDir::new().unwrap();
        let storage = SlotStorage::open(dir.path().join("slots")).unwrap();

        storage.set("greeting", "olá").unwrap();
        assert_eq!(storage.get("greeting").unwrap().as_deref(), Some("olá"));
    }

    #[test]
    fn test_missing_slot_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = SlotStorage::open(dir.path().join("slots")).unwrap();

        assert_eq!(storage.get("never_written").unwrap(), None);
        assert!(!storage.contains("never_written").unwrap());
    }

    #[test]
    fn test_set_overwrites_whole_value() {
        let dir = TempDir::new().unwrap();
        let storage = SlotStorage::open(dir.path().join("slots")).unwrap();

        storage.set("value", "a long first value").unwrap();
        storage.set("value", "short").unwrap();
        assert_eq!(storage.get("value").unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let dir = TempDir::new().unwrap();
        let storage = SlotStorage::open(dir.path().join("slots")).unwrap();

        for key in ["", "LOCK", "a/b", "..\\up", "espaço não"] {
            assert!(matches!(
                storage.set(key, "x"),
                Err(StoreError::InvalidSlotKey(_))
            ));
        }
    }

    #[test]
    fn test_second_open_fails_locked() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slots");

        let _storage = SlotStorage::open(&path).unwrap();
        let result = SlotStorage::open(&path);
        assert!(matches!(result, Err(StoreError::Locked)));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let storage = SlotStorage::open(dir.path().join("slots")).unwrap();

        storage.set("value", "x").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path().join("slots"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().all(|n| !n.ends_with(".tmp")), "{names:?}");
    }
}
