//! Roblox upstream gateway configuration.

use serde::{Deserialize, Serialize};

/// Upstream gateway configuration.
///
/// Each Roblox service lives on its own host; the base URLs are
/// configurable so tests can point the gateway at a stub server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Request timeout in seconds for every upstream call.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// User-Agent header sent on every upstream call. Roblox rejects
    /// requests without a browser-like agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Base URL of the Users API.
    #[serde(default = "default_users_base_url")]
    pub users_base_url: String,
    /// Base URL of the Presence API.
    #[serde(default = "default_presence_base_url")]
    pub presence_base_url: String,
    /// Base URL of the Thumbnails API.
    #[serde(default = "default_thumbnails_base_url")]
    pub thumbnails_base_url: String,
    /// Base URL of the Games API.
    #[serde(default = "default_games_base_url")]
    pub games_base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            users_base_url: default_users_base_url(),
            presence_base_url: default_presence_base_url(),
            thumbnails_base_url: default_thumbnails_base_url(),
            games_base_url: default_games_base_url(),
        }
    }
}

fn default_timeout() -> u64 {
    5
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_users_base_url() -> String {
    "https://users.roblox.com".to_string()
}

fn default_presence_base_url() -> String {
    "https://presence.roblox.com".to_string()
}

fn default_thumbnails_base_url() -> String {
    "https://thumbnails.roblox.com".to_string()
}

fn default_games_base_url() -> String {
    "https://games.roblox.com".to_string()
}
