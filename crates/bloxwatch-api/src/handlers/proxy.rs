//! Roblox proxy handlers.
//!
//! Stateless pass-throughs: each handler validates its parameters, calls
//! the gateway, and echoes the upstream response shape back to the
//! browser. Enrichment results are never written to the roster here; the
//! client commits them through the sync endpoints.

use axum::Json;
use axum::extract::{Query, State};

use bloxwatch_core::error::AppError;
use bloxwatch_core::types::{PlaceDetails, UniverseDetails};
use bloxwatch_gateway::types::{DataEnvelope, PresenceEnvelope, RobloxUser, ThumbnailEntry};

use crate::dto::{
    PlaceIdsQuery, PresenceRequest, UniverseIdsQuery, UserIdsQuery, UserSearchQuery,
    parse_id_list,
};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/roblox/users/search?username=
///
/// Zero matches is a successful response with an empty `data` array; the
/// client decides what to tell the operator.
pub async fn search_user(
    State(state): State<AppState>,
    Query(query): Query<UserSearchQuery>,
) -> Result<Json<DataEnvelope<RobloxUser>>, ApiError> {
    let username = query
        .username
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("Username is required"))?;

    let user = state.gateway.lookup_user(username).await?;
    Ok(Json(DataEnvelope {
        data: user.into_iter().collect(),
    }))
}

/// POST /api/roblox/presence
pub async fn batch_presence(
    State(state): State<AppState>,
    Json(request): Json<PresenceRequest>,
) -> Result<Json<PresenceEnvelope>, ApiError> {
    let user_ids = request
        .user_ids
        .ok_or_else(|| AppError::validation("userIds array is required"))?;

    let user_presences = state.gateway.batch_presence(&user_ids).await?;
    Ok(Json(PresenceEnvelope { user_presences }))
}

/// GET /api/roblox/thumbnails?userIds=
pub async fn batch_thumbnails(
    State(state): State<AppState>,
    Query(query): Query<UserIdsQuery>,
) -> Result<Json<DataEnvelope<ThumbnailEntry>>, ApiError> {
    let raw = query
        .user_ids
        .ok_or_else(|| AppError::validation("userIds are required"))?;
    let user_ids = parse_id_list(&raw)?;

    let data = state.gateway.batch_thumbnails(&user_ids).await?;
    Ok(Json(DataEnvelope { data }))
}

/// GET /api/roblox/places/details?placeIds=
///
/// Answers with a bare array, matching the upstream endpoint.
pub async fn batch_place_details(
    State(state): State<AppState>,
    Query(query): Query<PlaceIdsQuery>,
) -> Result<Json<Vec<PlaceDetails>>, ApiError> {
    let raw = query
        .place_ids
        .ok_or_else(|| AppError::validation("placeIds are required"))?;
    let place_ids = parse_id_list(&raw)?;

    let details = state.gateway.batch_place_details(&place_ids).await?;
    Ok(Json(details))
}

/// GET /api/roblox/universes/details?universeIds=
pub async fn batch_universe_details(
    State(state): State<AppState>,
    Query(query): Query<UniverseIdsQuery>,
) -> Result<Json<DataEnvelope<UniverseDetails>>, ApiError> {
    let raw = query
        .universe_ids
        .ok_or_else(|| AppError::validation("universeIds are required"))?;
    let universe_ids = parse_id_list(&raw)?;

    let data = state.gateway.batch_universe_details(&universe_ids).await?;
    Ok(Json(DataEnvelope { data }))
}

/// GET /api/roblox/games/icons?universeIds=
pub async fn batch_universe_icons(
    State(state): State<AppState>,
    Query(query): Query<UniverseIdsQuery>,
) -> Result<Json<DataEnvelope<ThumbnailEntry>>, ApiError> {
    let raw = query
        .universe_ids
        .ok_or_else(|| AppError::validation("universeIds are required"))?;
    let universe_ids = parse_id_list(&raw)?;

    let data = state.gateway.batch_universe_icons(&universe_ids).await?;
    Ok(Json(DataEnvelope { data }))
}
