//! Fan-out channel — the registry of connected viewers and the broadcast
//! operation.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::handle::{ViewerHandle, ViewerId};
use crate::message::ServerMessage;

/// Registry of connected viewer sessions with best-effort broadcast.
///
/// Registration is decoupled from handle creation so the roster store can
/// enqueue a connection's `SYNC` snapshot and register it within one
/// critical section, ordering the snapshot before any later delta.
#[derive(Debug)]
pub struct FanoutChannel {
    /// Connected viewers.
    viewers: DashMap<ViewerId, Arc<ViewerHandle>>,
    /// Outbound queue capacity per viewer.
    buffer_size: usize,
}

impl FanoutChannel {
    /// Creates a new, empty fan-out channel.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            viewers: DashMap::new(),
            buffer_size,
        }
    }

    /// Creates an unregistered handle plus the receiver half of its
    /// outbound queue. The caller registers the handle once its snapshot
    /// has been enqueued.
    pub fn create_handle(&self) -> (Arc<ViewerHandle>, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(self.buffer_size);
        (Arc::new(ViewerHandle::new(tx)), rx)
    }

    /// Registers a viewer for delta delivery.
    pub fn register(&self, handle: Arc<ViewerHandle>) {
        info!(viewer_id = %handle.id, "Viewer connected");
        self.viewers.insert(handle.id, handle);
    }

    /// Deregisters a viewer. The roster itself is untouched.
    pub fn unregister(&self, id: &ViewerId) {
        if let Some((_, handle)) = self.viewers.remove(id) {
            handle.mark_dead();
            info!(viewer_id = %id, "Viewer disconnected");
        }
    }

    /// Sends a message to a single viewer.
    pub fn send_to(&self, handle: &ViewerHandle, message: &ServerMessage) -> bool {
        match serde_json::to_string(message) {
            Ok(frame) => handle.send(frame),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize push message");
                false
            }
        }
    }

    /// Delivers a message to every registered viewer whose transport is
    /// still open. Errored or closed viewers are skipped and reaped; no
    /// retry, no per-viewer queue beyond the bounded outbound buffer.
    pub fn broadcast(&self, message: &ServerMessage) {
        let frame = match serde_json::to_string(message) {
            Ok(f) => f,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize broadcast message");
                return;
            }
        };

        let mut dead: Vec<ViewerId> = Vec::new();
        for entry in self.viewers.iter() {
            if !entry.value().send(frame.clone()) {
                dead.push(*entry.key());
            }
        }

        for id in dead {
            self.viewers.remove(&id);
            debug!(viewer_id = %id, "Reaped dead viewer during broadcast");
        }
    }

    /// Number of currently registered viewers.
    pub fn viewer_count(&self) -> usize {
        self.viewers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recv_type(rx: &mut mpsc::Receiver<String>) -> String {
        let frame = rx.try_recv().expect("expected a queued frame");
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        value["type"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn broadcast_reaches_all_registered_viewers() {
        let channel = FanoutChannel::new(8);
        let (a, mut rx_a) = channel.create_handle();
        let (b, mut rx_b) = channel.create_handle();
        channel.register(a);
        channel.register(b);

        channel.broadcast(&ServerMessage::Removed { user_id: 1 });

        assert_eq!(recv_type(&mut rx_a), "REMOVED");
        assert_eq!(recv_type(&mut rx_b), "REMOVED");
    }

    #[tokio::test]
    async fn dead_viewer_is_skipped_and_reaped() {
        let channel = FanoutChannel::new(8);
        let (dead, rx_dead) = channel.create_handle();
        let (live, mut rx_live) = channel.create_handle();
        channel.register(dead);
        channel.register(live);
        assert_eq!(channel.viewer_count(), 2);

        // Simulate a gone socket task.
        drop(rx_dead);

        channel.broadcast(&ServerMessage::Removed { user_id: 2 });

        assert_eq!(recv_type(&mut rx_live), "REMOVED");
        assert_eq!(channel.viewer_count(), 1);
    }

    #[tokio::test]
    async fn delivery_is_fifo_per_viewer() {
        let channel = FanoutChannel::new(8);
        let (handle, mut rx) = channel.create_handle();
        channel.register(handle);

        channel.broadcast(&ServerMessage::Removed { user_id: 1 });
        channel.broadcast(&ServerMessage::LogUpdated { history: vec![] });

        assert_eq!(recv_type(&mut rx), "REMOVED");
        assert_eq!(recv_type(&mut rx), "LOG_UPDATED");
    }

    #[tokio::test]
    async fn unregister_only_affects_the_departing_viewer() {
        let channel = FanoutChannel::new(8);
        let (a, _rx_a) = channel.create_handle();
        let (b, mut rx_b) = channel.create_handle();
        let a_id = a.id;
        channel.register(a);
        channel.register(b);

        channel.unregister(&a_id);
        channel.broadcast(&ServerMessage::Removed { user_id: 3 });

        assert_eq!(channel.viewer_count(), 1);
        assert_eq!(recv_type(&mut rx_b), "REMOVED");
    }
}
