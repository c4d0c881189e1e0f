//! Core types for the announcement store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering used for `created_at` timestamps (`dd/mm/yyyy, hh:mm:ss`).
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Accepted on parse as well: the same rendering without the comma.
const TIMESTAMP_FORMAT_NO_COMMA: &str = "%d/%m/%Y %H:%M:%S";

/// Unique identifier for an announcement (assigned by the store).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnouncementId(pub String);

impl fmt::Debug for AnnouncementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnnouncementId({})", self.0)
    }
}

impl fmt::Display for AnnouncementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AnnouncementId {
    fn from(s: String) -> Self {
        AnnouncementId(s)
    }
}

impl From<&str> for AnnouncementId {
    fn from(s: &str) -> Self {
        AnnouncementId(s.to_string())
    }
}

/// One community notice.
///
/// Records are immutable after creation; there is no update operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Unique identifier (assigned by the store).
    pub id: AnnouncementId,

    /// Display title.
    pub title: String,

    /// Body text, arbitrary length.
    pub description: String,

    /// Display name of the poster.
    pub author: String,

    /// Locale-rendered creation timestamp. Opaque text except for sort
    /// comparisons, which parse it back into a date-time.
    pub created_at: String,
}

/// Input for creating a new announcement (before the id is assigned).
///
/// All fields must be non-empty display strings by the time this reaches the
/// store; validation is the caller's responsibility.
#[derive(Clone, Debug)]
pub struct AnnouncementInput {
    pub title: String,
    pub description: String,
    pub author: String,
    pub created_at: String,
}

impl AnnouncementInput {
    /// New input stamped with the current local time.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            author: author.into(),
            created_at: format_timestamp(chrono::Local::now().naive_local()),
        }
    }

    /// Override the creation timestamp.
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }
}

/// Render a date-time in the `created_at` format.
pub fn format_timestamp(when: NaiveDateTime) -> String {
    when.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a `created_at` string back into a comparable date-time.
///
/// Returns `None` for text produced by another locale or by hand.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT_NO_COMMA))
        .ok()
}
