//! Frame builders for everything the inventory UI asks of the server.
//!
//! Each builder produces one request frame; the public `send_*` helpers pair
//! a builder with the shared [`FrameSender`] so call sites stay one-liners.
//! `ts` is left at zero — the server stamps receive time on every frame it
//! relays, so client clocks never enter ordering decisions.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use leptos::prelude::{GetUntracked, RwSignal};

use crate::app::FrameSender;
use crate::net::types::{Frame, FrameStatus};
use crate::util::form::ProductInput;

/// What to do when a mutation frame cannot be handed to the socket.
///
/// Only manual recovery exists today: the request is dropped, the pending
/// flag is cleared by the error path, and the user resubmits. New variants
/// (bounded auto-retry, queue-until-reconnect) slot in here without touching
/// call sites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Drop the frame; the user retries by resubmitting the form.
    #[default]
    Manual,
}

fn dispatch(sender: RwSignal<FrameSender>, frame: &Frame, policy: RetryPolicy) {
    let sent = sender.get_untracked().send(frame);
    match policy {
        RetryPolicy::Manual => {
            if !sent {
                warn_dropped(&frame.syscall);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn warn_dropped(syscall: &str) {
    log::warn!("dropped {syscall} frame; socket not ready");
}

#[cfg(not(feature = "hydrate"))]
fn warn_dropped(_syscall: &str) {}

/// Build the subscription request for the live product snapshot stream.
///
/// Crate-visible so the frame client can re-subscribe after a reconnect.
pub(crate) fn product_subscribe_frame() -> Frame {
    Frame {
        id: uuid::Uuid::new_v4().to_string(),
        parent_id: None,
        ts: 0,
        from: None,
        syscall: "product:subscribe".to_owned(),
        status: FrameStatus::Request,
        data: serde_json::json!({}),
    }
}

/// Build the cancel frame that tears the product subscription down.
///
/// Cancellation reuses the subscribe syscall with [`FrameStatus::Cancel`];
/// the server drops the registration and stops pushing snapshots.
fn product_subscribe_cancel_frame() -> Frame {
    Frame {
        id: uuid::Uuid::new_v4().to_string(),
        parent_id: None,
        ts: 0,
        from: None,
        syscall: "product:subscribe".to_owned(),
        status: FrameStatus::Cancel,
        data: serde_json::json!({}),
    }
}

fn product_payload(input: &ProductInput) -> serde_json::Value {
    serde_json::json!({
        "name": input.name,
        "sku": input.sku,
        "category": input.category,
        "cost": input.cost,
        "price": input.price,
        "stock": input.stock,
        "min_stock": input.min_stock,
    })
}

/// Build a create request carrying the full validated payload.
fn product_create_frame(input: &ProductInput) -> Frame {
    Frame {
        id: uuid::Uuid::new_v4().to_string(),
        parent_id: None,
        ts: 0,
        from: None,
        syscall: "product:create".to_owned(),
        status: FrameStatus::Request,
        data: product_payload(input),
    }
}

/// Build an update request. The payload is the complete replacement record,
/// not a diff — the server overwrites every mutable column.
fn product_update_frame(product_id: &str, input: &ProductInput) -> Frame {
    let mut data = product_payload(input);
    data["id"] = serde_json::Value::String(product_id.to_owned());
    Frame {
        id: uuid::Uuid::new_v4().to_string(),
        parent_id: None,
        ts: 0,
        from: None,
        syscall: "product:update".to_owned(),
        status: FrameStatus::Request,
        data,
    }
}

/// Build a delete request for one product id.
fn product_delete_frame(product_id: &str) -> Frame {
    Frame {
        id: uuid::Uuid::new_v4().to_string(),
        parent_id: None,
        ts: 0,
        from: None,
        syscall: "product:delete".to_owned(),
        status: FrameStatus::Request,
        data: serde_json::json!({ "id": product_id }),
    }
}

/// Ask the server to start streaming product snapshots to this client.
pub fn send_product_subscribe(sender: RwSignal<FrameSender>) {
    dispatch(sender, &product_subscribe_frame(), RetryPolicy::default());
}

/// Tell the server to stop streaming product snapshots to this client.
pub fn send_product_subscribe_cancel(sender: RwSignal<FrameSender>) {
    dispatch(sender, &product_subscribe_cancel_frame(), RetryPolicy::default());
}

/// Emit a create request for a validated form payload.
pub fn send_product_create(sender: RwSignal<FrameSender>, input: &ProductInput) {
    dispatch(sender, &product_create_frame(input), RetryPolicy::default());
}

/// Emit a full-replace update for an existing product.
pub fn send_product_update(sender: RwSignal<FrameSender>, product_id: &str, input: &ProductInput) {
    dispatch(sender, &product_update_frame(product_id, input), RetryPolicy::default());
}

/// Emit a delete request for one product.
pub fn send_product_delete(sender: RwSignal<FrameSender>, product_id: &str) {
    dispatch(sender, &product_delete_frame(product_id), RetryPolicy::default());
}
