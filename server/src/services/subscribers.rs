//! Catalog subscriber registry and snapshot fan-out.
//!
//! DESIGN
//! ======
//! Subscribers are websocket connections with a standing `product:subscribe`
//! request. Every product mutation triggers one fresh catalog read and the
//! same `product:snapshot` item goes to every registered channel. Pushing
//! whole snapshots instead of row diffs keeps replace-only client caches
//! from drifting.

use frames::{Frame, Status};
use serde_json::json;
use tokio::sync::mpsc;
use tracing::warn;
use uuid::Uuid;

use crate::frame;
use crate::services::product::{self, ProductRow};
use crate::state::AppState;

/// Register a subscriber channel under its client id.
pub async fn register(state: &AppState, client_id: Uuid, tx: mpsc::Sender<Frame>) {
    state.subscribers.write().await.insert(client_id, tx);
}

/// Remove a subscriber channel. Safe to call for unregistered ids.
pub async fn remove(state: &AppState, client_id: Uuid) {
    state.subscribers.write().await.remove(&client_id);
}

/// Build a `product:snapshot` push for the given catalog rows.
#[must_use]
pub fn snapshot_frame(products: &[ProductRow]) -> Frame {
    frame::push("product:snapshot", Status::Item, json!({ "products": products }))
}

/// Read the catalog and push a snapshot to every subscriber.
///
/// Read failures are logged and swallowed: the mutation that triggered the
/// refresh already committed, and clients recover on the next push.
pub async fn push_snapshot(state: &AppState) {
    let products = match product::list_products(&state.pool).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!(error = %e, "catalog snapshot refresh failed");
            return;
        }
    };
    broadcast(state, &snapshot_frame(&products)).await;
}

/// Send a frame to every subscriber.
pub async fn broadcast(state: &AppState, frame: &Frame) {
    let subs = state.subscribers.read().await;
    for tx in subs.values() {
        // Best-effort: if a client's channel is full, skip it.
        let _ = tx.try_send(frame.clone());
    }
}

#[cfg(test)]
#[path = "subscribers_test.rs"]
mod tests;
