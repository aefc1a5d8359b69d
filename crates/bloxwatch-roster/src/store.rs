//! The roster store — single authoritative owner of the tracked-user list
//! and activity log.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use bloxwatch_core::config::realtime::RealtimeConfig;
use bloxwatch_core::types::{ActivityLogEntry, LogKind, TrackedUser};
use bloxwatch_realtime::{FanoutChannel, ServerMessage, ViewerHandle};

use crate::history::ActivityHistory;

/// Full roster state handed to a newly connected viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// Tracked users, in insertion order.
    pub users: Vec<TrackedUser>,
    /// Activity log, newest first.
    pub history: Vec<ActivityLogEntry>,
}

/// Mutable state guarded by the store mutex.
#[derive(Debug)]
struct RosterState {
    users: Vec<TrackedUser>,
    history: ActivityHistory,
}

/// Single-writer roster store.
///
/// Every mutation runs inside one mutex, so two concurrent adds of the
/// same id can never both pass the existence check. Deltas are enqueued
/// into the fan-out channel inside the same critical section, after the
/// in-memory mutation — enqueueing never blocks, and the caller's
/// acknowledgement never waits on delivery to viewers.
///
/// The mutex is never held across an await point; upstream enrichment
/// happens before the store call, not inside it.
#[derive(Debug)]
pub struct RosterStore {
    state: Mutex<RosterState>,
    fanout: Arc<FanoutChannel>,
}

impl RosterStore {
    /// Creates an empty store wired to the given fan-out channel.
    pub fn new(config: &RealtimeConfig, fanout: Arc<FanoutChannel>) -> Self {
        Self {
            state: Mutex::new(RosterState {
                users: Vec::new(),
                history: ActivityHistory::new(config.history_limit),
            }),
            fanout,
        }
    }

    /// Adds a user to the roster.
    ///
    /// Idempotent: a duplicate id is a silent no-op — no error, no log
    /// entry, no broadcast. Returns whether the user was actually added.
    pub fn add_user(&self, user: TrackedUser) -> bool {
        let mut state = self.lock();

        if state.users.iter().any(|u| u.id == user.id) {
            debug!(user_id = user.id, "Duplicate add ignored");
            return false;
        }

        info!(user_id = user.id, name = %user.name, "User added to roster");
        let added = ServerMessage::Added { user: user.clone() };
        let entry = ActivityLogEntry::system(format!("Added {} to monitor", user.display_name));
        state.users.push(user);
        state.history.push(entry);

        self.fanout.broadcast(&added);
        self.fanout.broadcast(&ServerMessage::LogUpdated {
            history: state.history.to_vec(),
        });
        true
    }

    /// Removes the entry with the given id, if present.
    ///
    /// Always broadcasts `REMOVED` so every viewer converges, but only an
    /// actual removal produces a log entry. Returns whether an entry
    /// existed.
    pub fn remove_user(&self, id: u64) -> bool {
        let mut state = self.lock();

        let existing = state.users.iter().position(|u| u.id == id);
        let removed = match existing {
            Some(index) => Some(state.users.remove(index)),
            None => None,
        };

        self.fanout.broadcast(&ServerMessage::Removed { user_id: id });

        match removed {
            Some(user) => {
                info!(user_id = id, name = %user.name, "User removed from roster");
                state.history.push(ActivityLogEntry::system(format!(
                    "Removed {} from monitor",
                    user.display_name
                )));
                self.fanout.broadcast(&ServerMessage::LogUpdated {
                    history: state.history.to_vec(),
                });
                true
            }
            None => {
                debug!(user_id = id, "Remove of absent id ignored");
                false
            }
        }
    }

    /// Replaces the entry whose id matches `user.id` with the given value.
    ///
    /// Whole-record replace, not a field merge: optional fields the caller
    /// omitted are dropped. No-op for unknown ids. Returns whether a
    /// replace happened.
    pub fn update_user(&self, user: TrackedUser) -> bool {
        let mut state = self.lock();

        let Some(slot) = state.users.iter_mut().find(|u| u.id == user.id) else {
            debug!(user_id = user.id, "Update of unknown id ignored");
            return false;
        };
        *slot = user.clone();

        self.fanout.broadcast(&ServerMessage::Updated { user });
        true
    }

    /// Appends a log entry with a fresh id and broadcasts the new log.
    pub fn append_log(&self, kind: LogKind, message: impl Into<String>) -> ActivityLogEntry {
        let mut state = self.lock();

        let entry = ActivityLogEntry::new(kind, message);
        state.history.push(entry.clone());

        self.fanout.broadcast(&ServerMessage::LogUpdated {
            history: state.history.to_vec(),
        });
        entry
    }

    /// Returns the current roster list and log.
    pub fn snapshot(&self) -> RosterSnapshot {
        let state = self.lock();
        RosterSnapshot {
            users: state.users.clone(),
            history: state.history.to_vec(),
        }
    }

    /// Registers a new viewer, sending it a `SYNC` snapshot first.
    ///
    /// Snapshot and registration happen inside the roster critical
    /// section: any mutation committed before this call is in the
    /// snapshot, and any mutation after it will find the viewer
    /// registered — the viewer's first observed state is always
    /// self-consistent.
    pub fn attach(&self, handle: Arc<ViewerHandle>) {
        let state = self.lock();

        self.fanout.send_to(
            &handle,
            &ServerMessage::Sync {
                users: state.users.clone(),
                history: state.history.to_vec(),
            },
        );
        self.fanout.register(handle);
    }

    /// Number of tracked users.
    pub fn tracked_count(&self) -> usize {
        self.lock().users.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RosterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
