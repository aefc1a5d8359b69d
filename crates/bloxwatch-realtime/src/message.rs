//! Server→client push message definitions.

use serde::{Deserialize, Serialize};

use bloxwatch_core::types::{ActivityLogEntry, TrackedUser};

/// Messages pushed to connected viewers, tagged by `type` on the wire.
///
/// `Sync` is sent exactly once per connection, before any delta; every
/// other variant is an incremental change event. Clients treat each
/// message as authoritative and apply it regardless of arrival timing
/// relative to their own optimistic local state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Full snapshot for a newly connected viewer.
    #[serde(rename = "SYNC")]
    Sync {
        /// Current roster, in insertion order.
        users: Vec<TrackedUser>,
        /// Activity log, newest first.
        history: Vec<ActivityLogEntry>,
    },
    /// A user was added to the roster.
    #[serde(rename = "ADDED")]
    Added {
        /// The full new entry.
        user: TrackedUser,
    },
    /// A user was removed from the roster.
    #[serde(rename = "REMOVED")]
    Removed {
        /// Id of the removed entry.
        #[serde(rename = "userId")]
        user_id: u64,
    },
    /// A roster entry was replaced.
    #[serde(rename = "UPDATED")]
    Updated {
        /// The full replacement record.
        user: TrackedUser,
    },
    /// The activity log changed.
    #[serde(rename = "LOG_UPDATED")]
    LogUpdated {
        /// Full log, newest first.
        history: Vec<ActivityLogEntry>,
    },
}
