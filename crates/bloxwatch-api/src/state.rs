//! Application state shared across all handlers.

use std::sync::Arc;

use bloxwatch_core::config::AppConfig;
use bloxwatch_gateway::RobloxGateway;
use bloxwatch_realtime::FanoutChannel;
use bloxwatch_roster::RosterStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped (or internally reference-counted) for cheap cloning
/// across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Authoritative roster store.
    pub store: Arc<RosterStore>,
    /// Viewer fan-out channel.
    pub fanout: Arc<FanoutChannel>,
    /// Roblox upstream gateway.
    pub gateway: RobloxGateway,
}
