//! # Noticeboard
//!
//! Local-first storage core for a community noticeboard app: a durable
//! announcement collection inside a single key-value slot, a thin profile
//! slot-set, and a one-shot snapshot feed standing in for a future
//! real-time backend.
//!
//! ## Core Concepts
//!
//! - **Announcements**: immutable records with title, description, author,
//!   and a locale-rendered creation timestamp
//! - **Slots**: whole-value key-value persistence, one file per key,
//!   rewritten atomically on every mutation
//! - **Simulated latency**: every CRUD operation sleeps a configurable
//!   delay before touching storage, modeling the remote backend to come
//!
//! ## Example
//!
//! ```ignore
//! use noticeboard::{AnnouncementInput, AnnouncementStore, StoreConfig};
//!
//! let store = AnnouncementStore::open(StoreConfig {
//!     path: "./data/announcements".into(),
//!     ..Default::default()
//! })?;
//!
//! // Once, at application start.
//! store.seed_if_empty();
//!
//! let id = store.add(AnnouncementInput::new(
//!     "Feira de Artesanato",
//!     "Neste domingo, das 9h às 17h, na praça central.",
//!     "João Mendes",
//! )).await?;
//!
//! let announcements = store.list().await?;
//! ```

pub mod error;
pub mod profile;
mod seed;
pub mod storage;
pub mod store;
pub mod subscriptions;
pub mod types;

// Re-exports
pub use error::{Result, StoreError};
pub use profile::{ProfileStore, UserProfile};
pub use storage::SlotStorage;
pub use store::{AnnouncementStore, StoreConfig, DEFAULT_LATENCY};
pub use subscriptions::{SnapshotFeed, SubscriptionHandle, SubscriptionId};
pub use types::{Announcement, AnnouncementId, AnnouncementInput};
