//! The watchlist entry type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::game::{PlaceDetails, UniverseDetails};
use super::presence::PresenceSnapshot;

/// A tracked watchlist entry.
///
/// The identity fields come from the Users API; everything else is
/// enrichment filled in by refresh cycles. Updates replace the whole
/// record, so an enrichment pass resends every field it wants to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedUser {
    /// Upstream-assigned user id; unique roster key, immutable once added.
    pub id: u64,
    /// Account username.
    pub name: String,
    /// Display name shown on cards.
    pub display_name: String,
    /// Whether the account carries the verified badge.
    #[serde(default)]
    pub has_verified_badge: bool,
    /// Last known presence; absent until first enrichment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<PresenceSnapshot>,
    /// Avatar headshot URL.
    #[serde(default, rename = "thumbnail", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Details of the place the user is currently in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_details: Option<PlaceDetails>,
    /// Details of the universe the user is currently in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universe_details: Option<UniverseDetails>,
    /// Icon URL for the current universe.
    #[serde(default, rename = "universeIcon", skip_serializing_if = "Option::is_none")]
    pub universe_icon_url: Option<String>,
    /// User-pinned place id or roblox.com/games URL; overrides the
    /// displayed experience regardless of live presence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_game_ref: Option<String>,
    /// Details for the pinned experience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_place_details: Option<PlaceDetails>,
    /// Timestamp of the last enrichment.
    #[serde(default, rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,
}

/// Extracts a place id from a custom game reference.
///
/// Accepts either a raw numeric id (`"920587237"`) or a game URL
/// containing one (`"https://www.roblox.com/games/920587237/Adopt-Me"`).
pub fn parse_place_ref(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(id) = trimmed.parse::<u64>() {
        return Some(id);
    }

    let marker = "roblox.com/games/";
    let start = trimmed.find(marker)? + marker.len();
    let digits: String = trimmed[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
