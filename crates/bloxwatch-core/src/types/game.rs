//! Experience (game) detail types mirroring the Roblox Games API.

use serde::{Deserialize, Serialize};

/// Details for a single place, as returned by the Games API
/// `multiget-place-details` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    /// Place identifier.
    pub place_id: u64,
    /// Place name.
    pub name: String,
    /// Place description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Canonical web URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Display name of the builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder: Option<String>,
    /// User id of the builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder_id: Option<u64>,
}

/// Details for a universe (experience), as returned by the Games API
/// `games?universeIds=` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniverseDetails {
    /// Universe identifier.
    pub id: u64,
    /// Experience name.
    pub name: String,
    /// Experience description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creator of the experience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<UniverseCreator>,
    /// Root place of the universe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_place_id: Option<u64>,
}

/// Creator entry embedded in [`UniverseDetails`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseCreator {
    /// Creator id (user or group).
    pub id: u64,
    /// Creator display name.
    pub name: String,
    /// Creator kind ("User" or "Group").
    #[serde(rename = "type")]
    pub creator_type: String,
}
