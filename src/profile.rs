//! User profile persistence over three string slots.
//!
//! Structurally trivial next to the announcement collection: three
//! independent raw-string slots with get/set/persist semantics and no
//! simulated latency. The admin flag is stored as the literal text
//! `"true"`/`"false"`, mirroring the other slots.

use crate::error::Result;
use crate::storage::SlotStorage;
use std::path::Path;

const USER_NAME_SLOT: &str = "user_name";
const IS_ADMIN_SLOT: &str = "is_admin";
const LAST_USED_AUTHOR_SLOT: &str = "last_used_author";

/// Display profile for the posting and profile screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub user_name: String,
    pub is_admin: bool,
    pub last_used_author: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            user_name: "Usuário".to_string(),
            is_admin: false,
            last_used_author: String::new(),
        }
    }
}

/// Get/set/persist access to the profile slot-set.
///
/// Point it at its own directory, not the announcement store's; each slot
/// directory is exclusively owned by the instance that opened it.
pub struct ProfileStore {
    storage: SlotStorage,
}

impl ProfileStore {
    /// Open the profile slots, creating the directory if missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            storage: SlotStorage::open(path)?,
        })
    }

    /// Load the profile. Slots never written fall back to their defaults.
    pub fn load(&self) -> Result<UserProfile> {
        let defaults = UserProfile::default();

        let user_name = self
            .storage
            .get(USER_NAME_SLOT)?
            .unwrap_or(defaults.user_name);
        let is_admin = match self.storage.get(IS_ADMIN_SLOT)? {
            Some(text) => text == "true",
            None => defaults.is_admin,
        };
        let last_used_author = self
            .storage
            .get(LAST_USED_AUTHOR_SLOT)?
            .unwrap_or(defaults.last_used_author);

        Ok(UserProfile {
            user_name,
            is_admin,
            last_used_author,
        })
    }

    /// Persist all three slots.
    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        self.storage.set(USER_NAME_SLOT, &profile.user_name)?;
        self.storage
            .set(IS_ADMIN_SLOT, if profile.is_admin { "true" } else { "false" })?;
        self.storage
            .set(LAST_USED_AUTHOR_SLOT, &profile.last_used_author)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_when_never_saved() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::open(dir.path().join("profile")).unwrap();

        let profile = store.load().unwrap();
        assert_eq!(profile, UserProfile::default());
        assert_eq!(profile.user_name, "Usuário");
        assert!(!profile.is_admin);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::open(dir.path().join("profile")).unwrap();

        let profile = UserProfile {
            user_name: "Maria Silva".to_string(),
            is_admin: true,
            last_used_author: "Maria S.".to_string(),
        };
        store.save(&profile).unwrap();

        assert_eq!(store.load().unwrap(), profile);
    }

    #[test]
    fn test_admin_flag_persists_as_literal_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile");
        let store = ProfileStore::open(&path).unwrap();

        let mut profile = UserProfile::default();
        profile.is_admin = true;
        store.save(&profile).unwrap();
        assert_eq!(fs::read_to_string(path.join("is_admin")).unwrap(), "true");

        profile.is_admin = false;
        store.save(&profile).unwrap();
        assert_eq!(fs::read_to_string(path.join("is_admin")).unwrap(), "false");
    }

    #[test]
    fn test_partial_slots_fall_back_per_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile");

        {
            let store = ProfileStore::open(&path).unwrap();
            store
                .save(&UserProfile {
                    user_name: "João".to_string(),
                    is_admin: false,
                    last_used_author: "João M.".to_string(),
                })
                .unwrap();
        }

        // Drop one slot on disk; the other two keep their values.
        fs::remove_file(path.join("last_used_author")).unwrap();

        let store = ProfileStore::open(&path).unwrap();
        let profile = store.load().unwrap();
        assert_eq!(profile.user_name, "João");
        assert_eq!(profile.last_used_author, "");
    }
}
