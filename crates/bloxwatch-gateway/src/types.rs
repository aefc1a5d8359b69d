//! Upstream request/response shapes.

use serde::{Deserialize, Serialize};

use bloxwatch_core::types::PresenceSnapshot;

/// A user row from the Users API (exact lookup or fuzzy search).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobloxUser {
    /// Upstream user id.
    pub id: u64,
    /// Account username.
    pub name: String,
    /// Display name.
    pub display_name: String,
    /// Verified badge flag.
    #[serde(default)]
    pub has_verified_badge: bool,
}

/// The `{ "data": [...] }` envelope most Roblox list endpoints use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// Result rows.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Response envelope of the Presence API batch endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceEnvelope {
    /// One snapshot per requested user.
    #[serde(default = "Vec::new")]
    pub user_presences: Vec<PresenceSnapshot>,
}

/// A thumbnail or game-icon row from the Thumbnails API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailEntry {
    /// Id of the user or universe the image belongs to.
    pub target_id: u64,
    /// Render state ("Completed", "Pending", ...).
    pub state: String,
    /// CDN image URL; may be null while pending.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Error body shape shared by the Roblox web APIs.
#[derive(Debug, Clone, Deserialize)]
pub struct RobloxErrorBody {
    /// Reported errors, most specific first.
    #[serde(default = "Vec::new")]
    pub errors: Vec<RobloxErrorEntry>,
}

/// One entry of a [`RobloxErrorBody`].
#[derive(Debug, Clone, Deserialize)]
pub struct RobloxErrorEntry {
    /// Upstream error code.
    #[serde(default)]
    pub code: Option<i64>,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
}
