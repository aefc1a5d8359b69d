//! Shared test helpers for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::{Json, Router};
use futures::StreamExt;
use http::StatusCode;
use serde_json::{Value, json};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use bloxwatch_api::AppState;
use bloxwatch_core::config::AppConfig;
use bloxwatch_gateway::RobloxGateway;
use bloxwatch_realtime::FanoutChannel;
use bloxwatch_roster::RosterStore;

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Test application context: a real server on an ephemeral port, backed
/// by a stub Roblox upstream.
pub struct TestApp {
    /// Address the server is listening on.
    pub addr: SocketAddr,
    client: reqwest::Client,
}

impl TestApp {
    /// Spawns the stub upstream and the application server.
    pub async fn spawn() -> Self {
        let stub_addr = spawn_stub_roblox().await;
        let stub_base = format!("http://{stub_addr}");

        let mut config = AppConfig::default();
        config.gateway.timeout_seconds = 2;
        config.gateway.users_base_url = stub_base.clone();
        config.gateway.presence_base_url = stub_base.clone();
        config.gateway.thumbnails_base_url = stub_base.clone();
        config.gateway.games_base_url = stub_base;

        let fanout = Arc::new(FanoutChannel::new(config.realtime.outbound_buffer_size));
        let store = Arc::new(RosterStore::new(&config.realtime, Arc::clone(&fanout)));
        let gateway = RobloxGateway::new(config.gateway.clone()).expect("gateway build");

        let state = AppState {
            config: Arc::new(config),
            store,
            fanout,
            gateway,
        };

        let app = bloxwatch_api::build_router(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        Self {
            addr,
            client: reqwest::Client::new(),
        }
    }

    /// POST a JSON body, returning status and parsed response body.
    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .client
            .post(format!("http://{}{}", self.addr, path))
            .json(&body)
            .send()
            .await
            .expect("request");
        read_response(response).await
    }

    /// GET a path, returning status and parsed response body.
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let response = self
            .client
            .get(format!("http://{}{}", self.addr, path))
            .send()
            .await
            .expect("request");
        read_response(response).await
    }

    /// Opens a WebSocket viewer connection.
    pub async fn connect_ws(&self) -> WsClient {
        let (stream, _) = connect_async(format!("ws://{}/ws", self.addr))
            .await
            .expect("ws connect");
        stream
    }
}

async fn read_response(response: reqwest::Response) -> (StatusCode, Value) {
    let status = StatusCode::from_u16(response.status().as_u16()).expect("status");
    let body = response.text().await.expect("body");
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&body).expect("json body")
    };
    (status, value)
}

/// Reads the next text frame as JSON, failing the test on timeout.
pub async fn next_json(ws: &mut WsClient) -> Value {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(2), ws.next())
            .await
            .expect("timed out waiting for a push message")
            .expect("stream ended")
            .expect("ws error");
        if let Message::Text(text) = frame {
            return serde_json::from_str(&text).expect("json frame");
        }
    }
}

/// A minimal tracked-user record in wire form.
pub fn user_json(id: u64, display_name: &str) -> Value {
    json!({
        "id": id,
        "name": display_name.to_lowercase(),
        "displayName": display_name,
        "hasVerifiedBadge": false
    })
}

/// Spawns a stub of the Roblox web APIs on an ephemeral port.
///
/// Behavior is keyed on the request so one stub covers every scenario:
/// only "builderman" has an exact username match, the keyword
/// "ghost_user_zzz" matches nothing anywhere, and the presence endpoint
/// always answers 429 so status mirroring can be asserted.
async fn spawn_stub_roblox() -> SocketAddr {
    let app = Router::new()
        .route("/v1/usernames/users", post(stub_exact_lookup))
        .route("/v1/users/search", get(stub_fuzzy_search))
        .route("/v1/presence/users", post(stub_presence))
        .route("/v1/users/avatar-headshot", get(stub_thumbnails));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("stub bind");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub serve");
    });
    addr
}

async fn stub_exact_lookup(Json(body): Json<Value>) -> Json<Value> {
    let name = body["usernames"][0].as_str().unwrap_or_default();
    if name.eq_ignore_ascii_case("builderman") {
        Json(json!({
            "data": [{
                "id": 156,
                "name": "builderman",
                "displayName": "Builderman",
                "hasVerifiedBadge": true
            }]
        }))
    } else {
        Json(json!({ "data": [] }))
    }
}

#[derive(serde::Deserialize)]
struct SearchParams {
    keyword: String,
}

async fn stub_fuzzy_search(
    axum::extract::Query(params): axum::extract::Query<SearchParams>,
) -> Json<Value> {
    let keyword = params.keyword.as_str();
    if keyword == "ghost_user_zzz" {
        Json(json!({ "data": [] }))
    } else {
        Json(json!({
            "data": [{
                "id": 42,
                "name": keyword,
                "displayName": "FuzzyMatch",
                "hasVerifiedBadge": false
            }]
        }))
    }
}

async fn stub_presence() -> (StatusCode, Json<Value>) {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({ "errors": [{ "code": 4, "message": "Too many requests" }] })),
    )
}

async fn stub_thumbnails() -> Json<Value> {
    Json(json!({
        "data": [{
            "targetId": 156,
            "state": "Completed",
            "imageUrl": "https://stub.example/headshot/156.png"
        }]
    }))
}
