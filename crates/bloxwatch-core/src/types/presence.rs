//! Upstream presence state for a tracked user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Online state reported by the Roblox Presence API.
///
/// Serialized as the upstream integer code (`userPresenceType`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum PresenceKind {
    /// Not logged in.
    #[default]
    Offline,
    /// Logged in but not in an experience.
    Online,
    /// Playing an experience.
    InGame,
    /// Working in Roblox Studio.
    InStudio,
}

impl From<PresenceKind> for u8 {
    fn from(kind: PresenceKind) -> Self {
        match kind {
            PresenceKind::Offline => 0,
            PresenceKind::Online => 1,
            PresenceKind::InGame => 2,
            PresenceKind::InStudio => 3,
        }
    }
}

impl From<u8> for PresenceKind {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::Online,
            2 => Self::InGame,
            3 => Self::InStudio,
            // Unknown codes are treated as offline rather than rejected.
            _ => Self::Offline,
        }
    }
}

impl PresenceKind {
    /// Whether the user is in an experience or Studio, i.e. has an
    /// associated place/universe worth enriching.
    pub fn is_in_experience(self) -> bool {
        matches!(self, Self::InGame | Self::InStudio)
    }
}

/// A point-in-time presence result for one user.
///
/// Always embedded in a [`super::TrackedUser`] and replaced wholesale on
/// each refresh; there is no partial merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceSnapshot {
    /// Presence state code.
    #[serde(rename = "userPresenceType")]
    pub kind: PresenceKind,
    /// Human-readable location string from upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_location: Option<String>,
    /// Place the user is in, when in-game or in Studio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<u64>,
    /// Root place of the experience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_place_id: Option<u64>,
    /// Server instance identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    /// Universe (experience) the user is in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universe_id: Option<u64>,
    /// User this snapshot belongs to.
    pub user_id: u64,
    /// Last time the user was seen online; meaningful when offline.
    #[serde(default, rename = "lastOnline", skip_serializing_if = "Option::is_none")]
    pub last_online_at: Option<DateTime<Utc>>,
}
