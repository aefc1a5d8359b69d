//! The reqwest-backed Roblox API client.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, warn};

use bloxwatch_core::config::gateway::GatewayConfig;
use bloxwatch_core::error::AppError;
use bloxwatch_core::result::AppResult;
use bloxwatch_core::types::{PlaceDetails, PresenceSnapshot, UniverseDetails};

use crate::types::{DataEnvelope, PresenceEnvelope, RobloxErrorBody, RobloxUser, ThumbnailEntry};

/// Stateless client for the Roblox Users/Presence/Thumbnails/Games APIs.
///
/// Cheap to clone; the underlying `reqwest::Client` is an Arc internally.
#[derive(Debug, Clone)]
pub struct RobloxGateway {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl RobloxGateway {
    /// Builds a gateway from configuration.
    pub fn new(config: GatewayConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Looks up a user by name.
    ///
    /// Tries the exact-match endpoint first; when it reports zero rows,
    /// falls back to the fuzzy search endpoint and returns its top result.
    /// `None` means the name genuinely matched nothing — a result, not an
    /// error.
    pub async fn lookup_user(&self, name: &str) -> AppResult<Option<RobloxUser>> {
        debug!(username = %name, "Looking up user");

        let url = format!("{}/v1/usernames/users", self.config.users_base_url);
        let response = self
            .http
            .post(&url)
            .json(&json!({ "usernames": [name], "excludeBannedUsers": false }))
            .send()
            .await;
        let exact: DataEnvelope<RobloxUser> = self.read_json(response).await?;

        if let Some(user) = exact.data.into_iter().next() {
            debug!(username = %name, user_id = user.id, "Exact lookup succeeded");
            return Ok(Some(user));
        }

        warn!(username = %name, "No exact match, falling back to search");
        let url = format!("{}/v1/users/search", self.config.users_base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("keyword", name), ("limit", "1")])
            .send()
            .await;
        let fuzzy: DataEnvelope<RobloxUser> = self.read_json(response).await?;

        Ok(fuzzy.data.into_iter().next())
    }

    /// Fetches presence snapshots for a batch of user ids.
    pub async fn batch_presence(&self, user_ids: &[u64]) -> AppResult<Vec<PresenceSnapshot>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/v1/presence/users", self.config.presence_base_url);
        let response = self
            .http
            .post(&url)
            .json(&json!({ "userIds": user_ids }))
            .send()
            .await;
        let envelope: PresenceEnvelope = self.read_json(response).await?;
        Ok(envelope.user_presences)
    }

    /// Fetches avatar headshot thumbnails for a batch of user ids.
    pub async fn batch_thumbnails(&self, user_ids: &[u64]) -> AppResult<Vec<ThumbnailEntry>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/v1/users/avatar-headshot",
            self.config.thumbnails_base_url
        );
        let response = self
            .http
            .get(&url)
            .query(&[
                ("userIds", ids_param(user_ids).as_str()),
                ("size", "150x150"),
                ("format", "Png"),
                ("isCircular", "false"),
            ])
            .send()
            .await;
        let envelope: DataEnvelope<ThumbnailEntry> = self.read_json(response).await?;
        Ok(envelope.data)
    }

    /// Fetches details for a batch of place ids.
    ///
    /// This endpoint answers with a bare JSON array rather than the usual
    /// `data` envelope.
    pub async fn batch_place_details(&self, place_ids: &[u64]) -> AppResult<Vec<PlaceDetails>> {
        if place_ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/v1/games/multiget-place-details",
            self.config.games_base_url
        );
        let response = self
            .http
            .get(&url)
            .query(&[("placeIds", ids_param(place_ids).as_str())])
            .send()
            .await;
        self.read_json(response).await
    }

    /// Fetches details for a batch of universe ids.
    pub async fn batch_universe_details(
        &self,
        universe_ids: &[u64],
    ) -> AppResult<Vec<UniverseDetails>> {
        if universe_ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/v1/games", self.config.games_base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("universeIds", ids_param(universe_ids).as_str())])
            .send()
            .await;
        let envelope: DataEnvelope<UniverseDetails> = self.read_json(response).await?;
        Ok(envelope.data)
    }

    /// Fetches icon thumbnails for a batch of universe ids.
    pub async fn batch_universe_icons(
        &self,
        universe_ids: &[u64],
    ) -> AppResult<Vec<ThumbnailEntry>> {
        if universe_ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/v1/games/icons", self.config.thumbnails_base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("universeIds", ids_param(universe_ids).as_str()),
                ("size", "512x512"),
                ("format", "Png"),
                ("isCircular", "false"),
            ])
            .send()
            .await;
        let envelope: DataEnvelope<ThumbnailEntry> = self.read_json(response).await?;
        Ok(envelope.data)
    }

    /// Resolves a response into `T`, normalizing every failure mode into
    /// an upstream error.
    async fn read_json<T: DeserializeOwned>(
        &self,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> AppResult<T> {
        let response = response.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        if !(200..300).contains(&status) {
            return Err(normalize_failure(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| AppError::upstream(500, format!("Malformed upstream response: {e}")))
    }
}

/// Comma-joined id list, the form the Roblox query-string endpoints take.
fn ids_param(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Maps a transport-level failure (connect error, timeout) to an upstream
/// error. Timeouts carry no status; default to 500 per the proxy contract.
fn transport_error(err: reqwest::Error) -> AppError {
    let status = err.status().map(|s| s.as_u16()).unwrap_or(500);
    AppError::upstream(status, err.to_string())
}

/// Builds the mirrored error for a non-2xx upstream response.
///
/// The message is the first entry of the upstream `errors` array when the
/// body parses, otherwise the raw body text; the original payload rides
/// along as details.
fn normalize_failure(status: u16, body: &str) -> AppError {
    let parsed: Option<RobloxErrorBody> = serde_json::from_str(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|b| b.errors.first())
        .map(|e| e.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            if body.is_empty() {
                format!("Upstream returned status {status}")
            } else {
                body.to_string()
            }
        });

    let error = AppError::upstream(status, message);
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(details) => error.with_details(details),
        Err(_) => error,
    }
}
