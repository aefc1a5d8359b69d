//! Route definitions for the BloxWatch HTTP API.
//!
//! All REST routes are mounted under `/api`; the WebSocket upgrade lives
//! at `/ws`. The router receives `AppState` and passes it to all handlers
//! via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(sync_routes())
        .merge(proxy_routes())
        .merge(health_routes());

    let ws_routes = Router::new().route("/ws", get(handlers::ws::ws_upgrade));

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .merge(ws_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Roster sync endpoints
fn sync_routes() -> Router<AppState> {
    Router::new()
        .route("/users/sync/add", post(handlers::roster::add_user))
        .route("/users/sync/remove", post(handlers::roster::remove_user))
        .route("/users/sync/update", post(handlers::roster::update_user))
        .route("/users/sync/log", post(handlers::roster::append_log))
}

/// Roblox pass-through endpoints
fn proxy_routes() -> Router<AppState> {
    Router::new()
        .route("/roblox/users/search", get(handlers::proxy::search_user))
        .route("/roblox/presence", post(handlers::proxy::batch_presence))
        .route("/roblox/thumbnails", get(handlers::proxy::batch_thumbnails))
        .route(
            "/roblox/places/details",
            get(handlers::proxy::batch_place_details),
        )
        .route(
            "/roblox/universes/details",
            get(handlers::proxy::batch_universe_details),
        )
        .route(
            "/roblox/games/icons",
            get(handlers::proxy::batch_universe_icons),
        )
}

/// Health check endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
