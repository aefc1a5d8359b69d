//! Roster and WebSocket fan-out configuration.

use serde::{Deserialize, Serialize};

/// Real-time (WebSocket) fan-out configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Per-viewer outbound message buffer size. A viewer that falls this
    /// many messages behind is dropped rather than allowed to block others.
    #[serde(default = "default_outbound_buffer")]
    pub outbound_buffer_size: usize,
    /// Maximum number of activity log entries retained in memory.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            outbound_buffer_size: default_outbound_buffer(),
            history_limit: default_history_limit(),
        }
    }
}

fn default_outbound_buffer() -> usize {
    64
}

fn default_history_limit() -> usize {
    50
}
