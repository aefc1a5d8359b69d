//! Roster sync handlers.
//!
//! Mutations are idempotent from the caller's perspective: duplicate adds
//! and removes of absent ids still acknowledge with `{ "success": true }`
//! so the browser's flow stays simple.

use axum::Json;
use axum::extract::State;

use bloxwatch_core::error::AppError;
use bloxwatch_core::types::{LogKind, TrackedUser, parse_place_ref};

use crate::dto::{SuccessResponse, SyncLogRequest, SyncRemoveRequest, SyncUserRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/users/sync/add
pub async fn add_user(
    State(state): State<AppState>,
    Json(request): Json<SyncUserRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let mut user = request.into_user()?;
    canonicalize_custom_ref(&mut user);

    state.store.add_user(user);
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/users/sync/remove
pub async fn remove_user(
    State(state): State<AppState>,
    Json(request): Json<SyncRemoveRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let user_id = request
        .user_id
        .ok_or_else(|| AppError::validation("userId is required"))?;

    state.store.remove_user(user_id);
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/users/sync/update
pub async fn update_user(
    State(state): State<AppState>,
    Json(request): Json<SyncUserRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let mut user = request.into_user()?;
    canonicalize_custom_ref(&mut user);

    state.store.update_user(user);
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/users/sync/log
pub async fn append_log(
    State(state): State<AppState>,
    Json(request): Json<SyncLogRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let submission = request
        .log
        .ok_or_else(|| AppError::validation("Log entry is required"))?;

    state.store.append_log(
        submission.kind.unwrap_or(LogKind::Client),
        submission.message,
    );
    Ok(Json(SuccessResponse::ok()))
}

/// Rewrites a URL-form custom game reference to its bare place id, so
/// every stored record carries the canonical form. Unparseable refs are
/// stored as-is; the dashboard simply shows no pinned card for them.
fn canonicalize_custom_ref(user: &mut TrackedUser) {
    if let Some(raw) = user.custom_game_ref.as_deref() {
        if let Some(place_id) = parse_place_ref(raw) {
            user.custom_game_ref = Some(place_id.to_string());
        }
    }
}
