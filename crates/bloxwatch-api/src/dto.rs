//! Request and response bodies for the HTTP API.
//!
//! Required fields are modeled as `Option` so a missing field surfaces as
//! a 400 validation error with a useful message rather than a framework
//! deserialization rejection.

use serde::{Deserialize, Serialize};

use bloxwatch_core::error::AppError;
use bloxwatch_core::types::{LogKind, TrackedUser};

/// Body of `POST /api/users/sync/add` and `POST /api/users/sync/update`.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncUserRequest {
    /// The full tracked-user record.
    #[serde(default)]
    pub user: Option<TrackedUser>,
}

impl SyncUserRequest {
    /// Extracts the user or fails validation.
    pub fn into_user(self) -> Result<TrackedUser, AppError> {
        self.user
            .ok_or_else(|| AppError::validation("User is required"))
    }
}

/// Body of `POST /api/users/sync/remove`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRemoveRequest {
    /// Id of the entry to remove.
    #[serde(default)]
    pub user_id: Option<u64>,
}

/// Body of `POST /api/users/sync/log`.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncLogRequest {
    /// The submitted log entry.
    #[serde(default)]
    pub log: Option<LogSubmission>,
}

/// A client-submitted activity log entry. The store assigns the id and
/// timestamp; clients only supply the text and, optionally, the kind.
#[derive(Debug, Clone, Deserialize)]
pub struct LogSubmission {
    /// Entry origin; defaults to [`LogKind::Client`].
    #[serde(default)]
    pub kind: Option<LogKind>,
    /// Entry text.
    pub message: String,
}

/// Uniform acknowledgement for roster mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always true; failures go through the error path.
    pub success: bool,
}

impl SuccessResponse {
    /// The canonical `{ "success": true }` body.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Query of `GET /api/roblox/users/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSearchQuery {
    /// Username to look up.
    #[serde(default)]
    pub username: Option<String>,
}

/// Query carrying a comma-separated `userIds` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdsQuery {
    #[serde(default)]
    pub user_ids: Option<String>,
}

/// Query carrying a comma-separated `placeIds` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceIdsQuery {
    #[serde(default)]
    pub place_ids: Option<String>,
}

/// Query carrying a comma-separated `universeIds` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniverseIdsQuery {
    #[serde(default)]
    pub universe_ids: Option<String>,
}

/// Body of `POST /api/roblox/presence`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceRequest {
    /// Users to query presence for.
    #[serde(default)]
    pub user_ids: Option<Vec<u64>>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving.
    pub status: String,
    /// Connected viewer count.
    pub viewers: usize,
    /// Tracked user count.
    pub tracked: usize,
}

/// Parses a comma-separated id list, ignoring empty segments.
///
/// Fails validation when any segment is not a number, mirroring the
/// behavior a caller would get from the upstream API itself.
pub fn parse_id_list(raw: &str) -> Result<Vec<u64>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u64>()
                .map_err(|_| AppError::validation(format!("Invalid id in list: {s}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_ids() {
        assert_eq!(parse_id_list("1,2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_id_list(" 261 , 1818 ").unwrap(), vec![261, 1818]);
        assert_eq!(parse_id_list("").unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(parse_id_list("1,abc").is_err());
    }
}
