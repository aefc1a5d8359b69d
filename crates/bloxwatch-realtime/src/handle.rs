//! Individual viewer connection handle.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Unique viewer connection identifier.
pub type ViewerId = Uuid;

/// A handle to a single connected viewer.
///
/// Holds the sender side of the connection's outbound queue plus an alive
/// flag. The WebSocket task owns the receiver side and forwards queued
/// frames to the socket.
#[derive(Debug)]
pub struct ViewerHandle {
    /// Unique connection id.
    pub id: ViewerId,
    /// Sender for serialized outbound frames.
    sender: mpsc::Sender<String>,
    /// When the connection was established.
    pub connected_at: DateTime<Utc>,
    /// Whether the connection is still deliverable.
    alive: AtomicBool,
}

impl ViewerHandle {
    /// Create a new handle around the given outbound queue.
    pub fn new(sender: mpsc::Sender<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            connected_at: Utc::now(),
            alive: AtomicBool::new(true),
        }
    }

    /// Enqueue a serialized frame for this viewer without blocking.
    ///
    /// A full queue means the viewer has fallen too far behind; a closed
    /// queue means the socket task is gone. Either way the handle is
    /// marked dead and the frame is dropped — delivery is best-effort.
    pub fn send(&self, frame: String) -> bool {
        if !self.is_alive() {
            return false;
        }
        match self.sender.try_send(frame) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!(viewer_id = %self.id, "Viewer send buffer full, dropping connection");
                self.mark_dead();
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.mark_dead();
                false
            }
        }
    }

    /// Check whether the connection is still deliverable.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Mark the connection as dead.
    pub fn mark_dead(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}
