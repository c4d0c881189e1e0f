//! Announcement store: durable CRUD over the announcement collection.
//!
//! The whole collection lives inside a single slot of [`SlotStorage`] as a
//! JSON-encoded sequence. Every operation reads or rewrites the collection
//! at whole-collection granularity, the way a remote document store would,
//! and simulates a fixed network latency before touching the slot.
//!
//! Mutations are serialized through a per-instance write lock. Without it,
//! two concurrent read-modify-write cycles could silently clobber each
//! other at whole-collection granularity; the lock is never held across an
//! await point.

use crate::error::{Result, StoreError};
use crate::seed;
use crate::storage::SlotStorage;
use crate::types::{parse_timestamp, Announcement, AnnouncementId, AnnouncementInput};
use chrono::{Local, Utc};
use parking_lot::Mutex;
use std::cmp::Reverse;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Slot key holding the JSON-encoded announcement collection.
const ANNOUNCEMENTS_SLOT: &str = "announcements";

/// Default simulated network latency applied to every CRUD operation.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Store configuration.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Base path for the slot directory.
    pub path: PathBuf,

    /// Simulated network latency ahead of each CRUD operation.
    /// Zero disables the delay (useful in tests).
    pub latency: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./noticeboard"),
            latency: DEFAULT_LATENCY,
        }
    }
}

/// The announcement store.
///
/// Construct it once at application start with [`AnnouncementStore::open`],
/// then call [`seed_if_empty`](AnnouncementStore::seed_if_empty) explicitly
/// before serving the first screen.
pub struct AnnouncementStore {
    /// Slot storage backing the collection.
    storage: SlotStorage,

    /// Simulated latency ahead of each CRUD operation.
    latency: Duration,

    /// Lock serializing read-modify-write mutations.
    write_lock: Mutex<()>,
}

impl AnnouncementStore {
    /// Open the store, creating the slot directory if missing.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let storage = SlotStorage::open(&config.path)?;

        Ok(Self {
            storage,
            latency: config.latency,
            write_lock: Mutex::new(()),
        })
    }

    /// Write the demonstration dataset if the slot has never been written.
    ///
    /// Idempotent: once the slot holds a value (seeded or user-written),
    /// later calls observe it and no-op. Failures are logged and swallowed;
    /// an unseeded slot just means [`list`](AnnouncementStore::list) returns
    /// empty.
    pub fn seed_if_empty(&self) {
        if let Err(e) = self.try_seed() {
            error!("failed to seed demonstration data: {}", e);
        }
    }

    fn try_seed(&self) -> Result<()> {
        let _lock = self.write_lock.lock();

        if self.storage.contains(ANNOUNCEMENTS_SLOT)? {
            return Ok(());
        }

        let records = seed::demo_announcements(Local::now().naive_local());
        self.store_collection(&records)?;
        debug!("seeded {} demonstration announcements", records.len());
        Ok(())
    }

    /// Create a new announcement and return its assigned id.
    ///
    /// The record is prepended to the persisted sequence; ordering for
    /// readers is computed by [`list`](AnnouncementStore::list) regardless.
    pub async fn add(&self, input: AnnouncementInput) -> Result<AnnouncementId> {
        self.simulate_latency().await;

        let _lock = self.write_lock.lock();

        let mut records = self.load_collection()?;
        let id = next_id(&records);

        let record = Announcement {
            id: id.clone(),
            title: input.title,
            description: input.description,
            author: input.author,
            created_at: input.created_at,
        };

        records.insert(0, record);
        self.store_collection(&records)?;

        debug!("added announcement {}", id);
        Ok(id)
    }

    /// Read the full collection, most recent first.
    ///
    /// Ties keep their stored order; an absent or empty slot yields an
    /// empty sequence, never an error.
    pub async fn list(&self) -> Result<Vec<Announcement>> {
        self.simulate_latency().await;

        let mut records = self.load_collection()?;
        sort_most_recent_first(&mut records);
        Ok(records)
    }

    /// Look up a single announcement. `Ok(None)` when the id is unknown.
    pub async fn get_by_id(&self, id: &AnnouncementId) -> Result<Option<Announcement>> {
        self.simulate_latency().await;

        let records = self.load_collection()?;
        Ok(records.into_iter().find(|a| &a.id == id))
    }

    /// Delete the announcement with the given id.
    ///
    /// Removing an id that is not present succeeds silently with no change.
    pub async fn remove(&self, id: &AnnouncementId) -> Result<()> {
        self.simulate_latency().await;

        let _lock = self.write_lock.lock();

        let mut records = self.load_collection()?;
        let before = records.len();
        records.retain(|a| &a.id != id);

        if records.len() == before {
            debug!("remove: no announcement with id {}", id);
        }

        self.store_collection(&records)?;
        Ok(())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn load_collection(&self) -> Result<Vec<Announcement>> {
        match self.storage.get(ANNOUNCEMENTS_SLOT)? {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| StoreError::Deserialization(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    fn store_collection(&self, records: &[Announcement]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        self.storage.set(ANNOUNCEMENTS_SLOT, &json)
    }
}

/// Generate a collection-unique id from the current wall clock.
///
/// Millisecond resolution is unique enough for single-device use; the bump
/// loop covers back-to-back adds landing on the same millisecond.
fn next_id(existing: &[Announcement]) -> AnnouncementId {
    let mut millis = Utc::now().timestamp_millis();
    loop {
        let candidate = AnnouncementId(millis.to_string());
        if !existing.iter().any(|a| a.id == candidate) {
            return candidate;
        }
        millis += 1;
    }
}

/// Stable descending sort by parsed `created_at`.
///
/// Unparseable timestamps sort after every parseable one, keeping their
/// relative stored order.
fn sort_most_recent_first(records: &mut [Announcement]) {
    records.sort_by_cached_key(|a| {
        let parsed = parse_timestamp(&a.created_at);
        if parsed.is_none() {
            warn!(
                "unparseable created_at {:?} on announcement {}",
                a.created_at, a.id
            );
        }
        Reverse(parsed)
    });
}
