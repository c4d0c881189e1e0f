//! One-shot snapshot delivery for collection consumers.
//!
//! The slot layer has no change feed, so the "subscription" the screens
//! consume is deliberately a single disguised fetch: each request delivers
//! the current collection exactly once and never again, even when the data
//! changes afterward. The handle exists for interface compatibility with a
//! future real push feed; there is nothing to tear down.
//!
//! # Example
//!
//! ```ignore
//! let feed = SnapshotFeed::new(Arc::clone(&store));
//!
//! let handle = feed.fetch_once(|announcements| {
//!     render(announcements);
//! });
//!
//! // Later, from the screen teardown path:
//! handle.unsubscribe();
//! ```

use crate::store::AnnouncementStore;
use crate::types::Announcement;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::error;

/// Unique identifier for a snapshot request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Handle returned from [`SnapshotFeed::fetch_once`].
#[derive(Debug)]
pub struct SubscriptionHandle {
    pub id: SubscriptionId,
}

impl SubscriptionHandle {
    /// No-op. The delivery is one-shot, so there is nothing to cancel.
    pub fn unsubscribe(self) {}
}

/// Delivers one snapshot of the announcement collection per request.
pub struct SnapshotFeed {
    store: Arc<AnnouncementStore>,

    /// Counter for generating request ids.
    next_id: AtomicU64,
}

impl SnapshotFeed {
    pub fn new(store: Arc<AnnouncementStore>) -> Self {
        Self {
            store,
            next_id: AtomicU64::new(1),
        }
    }

    /// Invoke `callback` exactly once, asynchronously, with the current
    /// sorted collection.
    ///
    /// Fire-and-forget: a storage failure is logged and the callback is
    /// never invoked. No further deliveries occur from this request, even
    /// when the collection changes afterward.
    pub fn fetch_once<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: FnOnce(Vec<Announcement>) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let store = Arc::clone(&self.store);

        tokio::spawn(async move {
            match store.list().await {
                Ok(records) => callback(records),
                Err(e) => error!("snapshot delivery failed: {}", e),
            }
        });

        SubscriptionHandle { id }
    }
}
