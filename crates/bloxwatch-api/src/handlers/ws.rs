//! WebSocket upgrade handler.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tracing::{info, warn};

use crate::state::AppState;

/// GET /ws — WebSocket upgrade
pub async fn ws_upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_ws_connection(state, socket))
}

/// Handles an established WebSocket connection.
///
/// The viewer's `SYNC` snapshot is enqueued and the handle registered by
/// `attach`, inside the roster's critical section, before any frame is
/// forwarded — so the snapshot always precedes the deltas that follow it.
async fn handle_ws_connection(state: AppState, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    let (handle, mut outbound_rx) = state.fanout.create_handle();
    let viewer_id = handle.id;
    state.store.attach(handle);

    info!(viewer_id = %viewer_id, "WebSocket connection established");

    // Forward queued frames to the socket
    let outbound_task = tokio::spawn(async move {
        while let Some(frame) = outbound_rx.recv().await {
            if ws_tx.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    });

    // The protocol is push-only: text frames from the client are ignored,
    // mutations arrive over the HTTP sync endpoints.
    while let Some(result) = ws_rx.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(viewer_id = %viewer_id, error = %e, "WebSocket error");
                break;
            }
        }
    }

    outbound_task.abort();
    state.fanout.unregister(&viewer_id);

    info!(viewer_id = %viewer_id, "WebSocket connection closed");
}
