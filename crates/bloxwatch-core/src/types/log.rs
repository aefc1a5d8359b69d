//! Activity log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Origin of an activity log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    /// Generated by the roster store itself (add/remove).
    System,
    /// Submitted by a connected client.
    Client,
}

/// An append-only audit record in the bounded activity log.
///
/// Never mutated after creation; only discarded when the ring overflows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    /// Process-unique id: millisecond timestamp plus a random hex suffix.
    pub id: String,
    /// Entry origin.
    pub kind: LogKind,
    /// Entry text.
    pub message: String,
    /// Creation time.
    #[serde(rename = "timestamp")]
    pub occurred_at: DateTime<Utc>,
}

impl ActivityLogEntry {
    /// Create a new entry with a fresh id.
    pub fn new(kind: LogKind, message: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: format!("{}-{:04x}", now.timestamp_millis(), rand::random::<u16>()),
            kind,
            message: message.into(),
            occurred_at: now,
        }
    }

    /// Create a system-generated entry.
    pub fn system(message: impl Into<String>) -> Self {
        Self::new(LogKind::System, message)
    }

    /// Create a client-submitted entry.
    pub fn client(message: impl Into<String>) -> Self {
        Self::new(LogKind::Client, message)
    }
}
