//! WebSocket handler — frame dispatch for the live catalog.
//!
//! DESIGN
//! ======
//! On upgrade, generates a client ID and enters a `select!` loop:
//! - Incoming client frames → decode + dispatch by syscall prefix
//! - Snapshot pushes from the subscriber registry → forward to client
//!
//! Handler functions are pure business logic — they validate, mutate the
//! catalog, and return an `Outcome`. The dispatch layer owns all outbound
//! concerns: reply to sender and snapshot fan-out.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → send `session:connected`
//! 2. Client sends frames → dispatch → handler returns Outcome
//! 3. Dispatch applies Outcome (reply / snapshot / both)
//! 4. Close → deregister the subscription

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use frames::{Frame, Status};
use serde_json::{Value, json};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::frame::{self, FrameReply};
use crate::services;
use crate::state::AppState;

// =============================================================================
// OUTCOME
// =============================================================================

/// Result returned by handler functions. The dispatch layer uses this to
/// decide who receives what — handlers never send frames directly.
enum Outcome {
    /// Send done+data to the sender, then push a fresh catalog snapshot to
    /// every subscriber. The sender receives that snapshot through its own
    /// registry channel like everyone else.
    ReplyAndRefresh(Value),
    /// Send done to the sender followed immediately by a snapshot item.
    /// Used for subscribe, where only the new subscriber needs the catalog.
    ReplyWithSnapshot,
    /// Nothing goes back to the sender.
    Silent,
}

// =============================================================================
// UPGRADE
// =============================================================================

pub async fn handle_ws(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    ws: WebSocketUpgrade,
) -> Response {
    let Some(ticket) = params.get("ticket") else {
        return (StatusCode::UNAUTHORIZED, "ticket required").into_response();
    };

    let user_id = match services::session::consume_ws_ticket(&state.pool, ticket).await {
        Ok(Some(uid)) => uid,
        Ok(None) => return (StatusCode::UNAUTHORIZED, "invalid or expired ticket").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "ws ticket validation failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "ticket validation error").into_response();
        }
    };

    ws.on_upgrade(move |socket| run_ws(socket, state, user_id))
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_ws(mut socket: WebSocket, state: AppState, user_id: Uuid) {
    let client_id = Uuid::new_v4();

    // Per-connection channel for receiving snapshot pushes.
    let (client_tx, mut client_rx) = mpsc::channel::<Frame>(256);

    let welcome = frame::push(
        "session:connected",
        Status::Request,
        json!({ "client_id": client_id, "user_id": user_id }),
    );
    if send_frame(&mut socket, &welcome).await.is_err() {
        return;
    }

    info!(%client_id, %user_id, "ws: client connected");

    // Whether this connection holds a catalog subscription.
    let mut subscribed = false;

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(msg) = msg else { break };
                let Ok(msg) = msg else { break };
                match msg {
                    Message::Binary(bytes) => {
                        dispatch_frame(&state, &mut socket, &mut subscribed, client_id, user_id, &client_tx, &bytes).await;
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            Some(frame) = client_rx.recv() => {
                if send_frame(&mut socket, &frame).await.is_err() {
                    break;
                }
            }
        }
    }

    if subscribed {
        services::subscribers::remove(&state, client_id).await;
    }
    info!(%client_id, "ws: client disconnected");
}

// =============================================================================
// FRAME DISPATCH
// =============================================================================

/// Decode an incoming binary frame, dispatch to handler, apply outcome.
async fn dispatch_frame(
    state: &AppState,
    socket: &mut WebSocket,
    subscribed: &mut bool,
    client_id: Uuid,
    user_id: Uuid,
    client_tx: &mpsc::Sender<Frame>,
    bytes: &[u8],
) {
    let sender_frames = process_inbound(state, subscribed, client_id, user_id, client_tx, bytes).await;
    for frame in sender_frames {
        let _ = send_frame(socket, &frame).await;
    }
}

/// Decode and process one inbound frame and return frames for the sender.
///
/// This keeps the websocket transport concerns separate from frame handling,
/// so tests can exercise dispatch behavior without a socket.
async fn process_inbound(
    state: &AppState,
    subscribed: &mut bool,
    client_id: Uuid,
    user_id: Uuid,
    client_tx: &mpsc::Sender<Frame>,
    bytes: &[u8],
) -> Vec<Frame> {
    let mut req = match frames::decode_frame(bytes) {
        Ok(r) => r,
        Err(e) => {
            warn!(%client_id, error = %e, "ws: invalid inbound frame");
            return vec![frame::push(
                "gateway:error",
                Status::Error,
                json!({ "message": format!("invalid frame: {e}") }),
            )];
        }
    };

    // Stamp the authenticated user_id as `from` and the receive time as `ts`.
    // Clients send ts zero.
    req.from = Some(user_id.to_string());
    req.ts = frame::now_ms();

    info!(%client_id, id = %req.id, syscall = %req.syscall, status = ?req.status, "ws: recv frame");

    let result = match req.prefix() {
        "product" => handle_product(state, subscribed, client_id, client_tx, &req).await,
        other => Err(req.error(format!("unknown prefix: {other}"))),
    };

    // Apply outcome — the dispatch layer owns all outbound logic.
    match result {
        Ok(Outcome::ReplyAndRefresh(data)) => {
            let reply = req.done_with(data);
            services::subscribers::push_snapshot(state).await;
            vec![reply]
        }
        Ok(Outcome::ReplyWithSnapshot) => match services::product::list_products(&state.pool).await {
            Ok(rows) => vec![req.done(), services::subscribers::snapshot_frame(&rows)],
            Err(e) => vec![req.error_from(&e)],
        },
        Ok(Outcome::Silent) => vec![],
        Err(err_frame) => vec![err_frame],
    }
}

// =============================================================================
// PRODUCT HANDLERS
// =============================================================================

async fn handle_product(
    state: &AppState,
    subscribed: &mut bool,
    client_id: Uuid,
    client_tx: &mpsc::Sender<Frame>,
    req: &Frame,
) -> Result<Outcome, Frame> {
    let op = req.syscall.split_once(':').map_or("", |(_, op)| op);

    // Cancel only ever targets the subscription stream.
    if req.status == Status::Cancel {
        if op == "subscribe" && *subscribed {
            services::subscribers::remove(state, client_id).await;
            *subscribed = false;
        }
        return Ok(Outcome::Silent);
    }
    if req.status != Status::Request {
        warn!(syscall = %req.syscall, status = ?req.status, "ws: dropping non-request frame");
        return Ok(Outcome::Silent);
    }

    match op {
        "subscribe" => {
            services::subscribers::register(state, client_id, client_tx.clone()).await;
            *subscribed = true;
            Ok(Outcome::ReplyWithSnapshot)
        }
        "create" => {
            let draft = services::product::ProductDraft::from_data(&req.data).map_err(|e| req.error_from(&e))?;
            match services::product::create_product(&state.pool, &draft).await {
                Ok(id) => Ok(Outcome::ReplyAndRefresh(json!({ "id": id }))),
                Err(e) => Err(req.error_from(&e)),
            }
        }
        "update" => {
            let product_id = require_product_id(req)?;
            let draft = services::product::ProductDraft::from_data(&req.data).map_err(|e| req.error_from(&e))?;
            match services::product::update_product(&state.pool, product_id, &draft).await {
                Ok(()) => Ok(Outcome::ReplyAndRefresh(json!({ "id": product_id }))),
                Err(e) => Err(req.error_from(&e)),
            }
        }
        "delete" => {
            let product_id = require_product_id(req)?;
            match services::product::delete_product(&state.pool, product_id).await {
                Ok(()) => Ok(Outcome::ReplyAndRefresh(json!({ "id": product_id }))),
                Err(e) => Err(req.error_from(&e)),
            }
        }
        _ => Err(req.error(format!("unknown product op: {op}"))),
    }
}

fn require_product_id(req: &Frame) -> Result<Uuid, Frame> {
    req.data
        .get("id")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| req.error("id required"))
}

// =============================================================================
// HELPERS
// =============================================================================

async fn send_frame(socket: &mut WebSocket, frame: &Frame) -> Result<(), ()> {
    if frame.status == Status::Error {
        let code = frame
            .data
            .get("code")
            .and_then(|v| v.as_str())
            .unwrap_or("-");
        let message = frame
            .data
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("-");
        warn!(id = %frame.id, syscall = %frame.syscall, code, message, "ws: send frame status=Error");
    } else {
        info!(id = %frame.id, syscall = %frame.syscall, status = ?frame.status, "ws: send frame");
    }
    socket
        .send(Message::Binary(frames::encode_frame(frame).into()))
        .await
        .map_err(|_| ())
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
