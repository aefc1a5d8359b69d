//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        viewers: state.fanout.viewer_count(),
        tracked: state.store.tracked_count(),
    })
}
