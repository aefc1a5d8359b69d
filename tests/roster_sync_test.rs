//! Integration tests for the roster sync endpoints and WebSocket fan-out.

mod common;

use http::StatusCode;
use serde_json::json;

use common::{TestApp, next_json, user_json};

#[tokio::test]
async fn new_viewer_receives_sync_before_any_delta() {
    let app = TestApp::spawn().await;
    let mut ws = app.connect_ws().await;

    let sync = next_json(&mut ws).await;
    assert_eq!(sync["type"], "SYNC");
    assert_eq!(sync["users"].as_array().unwrap().len(), 0);
    assert_eq!(sync["history"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn add_broadcasts_added_then_log_updated() {
    let app = TestApp::spawn().await;
    let mut ws = app.connect_ws().await;
    next_json(&mut ws).await; // SYNC

    let (status, body) = app
        .post_json("/api/users/sync/add", json!({ "user": user_json(1, "Alice") }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let added = next_json(&mut ws).await;
    assert_eq!(added["type"], "ADDED");
    assert_eq!(added["user"]["displayName"], "Alice");

    let log = next_json(&mut ws).await;
    assert_eq!(log["type"], "LOG_UPDATED");
    assert_eq!(log["history"][0]["message"], "Added Alice to monitor");
    assert_eq!(log["history"][0]["kind"], "system");
}

#[tokio::test]
async fn late_joiner_snapshot_reflects_prior_mutations() {
    let app = TestApp::spawn().await;

    app.post_json("/api/users/sync/add", json!({ "user": user_json(1, "Alice") }))
        .await;
    app.post_json("/api/users/sync/add", json!({ "user": user_json(2, "Bob") }))
        .await;
    app.post_json("/api/users/sync/remove", json!({ "userId": 2 }))
        .await;

    let mut ws = app.connect_ws().await;
    let sync = next_json(&mut ws).await;

    assert_eq!(sync["type"], "SYNC");
    let users = sync["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], 1);
    // Added Alice, added Bob, removed Bob.
    assert_eq!(sync["history"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn remove_broadcasts_removed_then_log_updated() {
    let app = TestApp::spawn().await;
    app.post_json("/api/users/sync/add", json!({ "user": user_json(7, "Carol") }))
        .await;

    let mut ws = app.connect_ws().await;
    next_json(&mut ws).await; // SYNC

    let (status, body) = app
        .post_json("/api/users/sync/remove", json!({ "userId": 7 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let removed = next_json(&mut ws).await;
    assert_eq!(removed["type"], "REMOVED");
    assert_eq!(removed["userId"], 7);

    let log = next_json(&mut ws).await;
    assert_eq!(log["type"], "LOG_UPDATED");
    assert_eq!(log["history"][0]["message"], "Removed Carol from monitor");
}

#[tokio::test]
async fn update_broadcasts_the_replacement_record() {
    let app = TestApp::spawn().await;
    app.post_json("/api/users/sync/add", json!({ "user": user_json(3, "Dave") }))
        .await;

    let mut ws = app.connect_ws().await;
    next_json(&mut ws).await; // SYNC

    let mut updated_user = user_json(3, "Dave");
    updated_user["customGameRef"] =
        json!("https://www.roblox.com/games/920587237/Adopt-Me");
    let (status, _) = app
        .post_json("/api/users/sync/update", json!({ "user": updated_user }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let updated = next_json(&mut ws).await;
    assert_eq!(updated["type"], "UPDATED");
    // URL refs are canonicalized to the bare place id on the way in.
    assert_eq!(updated["user"]["customGameRef"], "920587237");
}

#[tokio::test]
async fn client_log_submission_reaches_all_viewers() {
    let app = TestApp::spawn().await;
    let mut ws_a = app.connect_ws().await;
    let mut ws_b = app.connect_ws().await;
    next_json(&mut ws_a).await;
    next_json(&mut ws_b).await;

    let (status, _) = app
        .post_json(
            "/api/users/sync/log",
            json!({ "log": { "message": "manual refresh" } }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    for ws in [&mut ws_a, &mut ws_b] {
        let log = next_json(ws).await;
        assert_eq!(log["type"], "LOG_UPDATED");
        assert_eq!(log["history"][0]["message"], "manual refresh");
        assert_eq!(log["history"][0]["kind"], "client");
    }
}

#[tokio::test]
async fn missing_required_fields_are_rejected_with_400() {
    let app = TestApp::spawn().await;

    for (path, body) in [
        ("/api/users/sync/add", json!({})),
        ("/api/users/sync/remove", json!({})),
        ("/api/users/sync/update", json!({})),
        ("/api/users/sync/log", json!({})),
    ] {
        let (status, body) = app.post_json(path, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(body["error"], "VALIDATION_ERROR", "{path}");
    }
}

#[tokio::test]
async fn health_reports_viewer_and_roster_counts() {
    let app = TestApp::spawn().await;
    app.post_json("/api/users/sync/add", json!({ "user": user_json(9, "Eve") }))
        .await;
    let mut ws = app.connect_ws().await;
    next_json(&mut ws).await;

    let (status, body) = app.get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["viewers"], 1);
    assert_eq!(body["tracked"], 1);
}
