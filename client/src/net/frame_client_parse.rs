//! Parsing helpers for `frame_client` payload handling.

#[cfg(test)]
#[path = "frame_client_parse_test.rs"]
mod frame_client_parse_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{Frame, Product};

/// Extract the product list from a `product:snapshot` payload.
///
/// Returns `None` when the payload has no `products` array or any row fails
/// to deserialize; a malformed snapshot is dropped whole rather than applied
/// partially, since the cache contract is complete replacement.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn parse_snapshot_products(data: &serde_json::Value) -> Option<Vec<Product>> {
    let rows = data.get("products")?.clone();
    serde_json::from_value::<Vec<Product>>(rows).ok()
}

/// Server-supplied error text from an error frame, if any.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn frame_error_message(frame: &Frame) -> Option<&str> {
    pick_str(&frame.data, &["message", "error"])
}

#[cfg(any(test, feature = "hydrate"))]
fn pick_str<'a>(data: &'a serde_json::Value, keys: &[&str]) -> Option<&'a str> {
    for key in keys {
        if let Some(value) = data.get(key).and_then(serde_json::Value::as_str) {
            return Some(value);
        }
    }
    None
}
