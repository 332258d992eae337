//! Product frame handlers extracted from `frame_client`.
//!
//! Terminal mutation frames resolve the pending flags no matter which way
//! they land: a `done` confirms and closes the editor/dialog, an `error`
//! re-enables the controls so the user can retry. Snapshot items replace the
//! cache wholesale.

#[cfg(test)]
#[path = "frame_client_products_test.rs"]
mod frame_client_products_test;

#[cfg(any(test, feature = "hydrate"))]
use super::frame_client_parse::{frame_error_message, parse_snapshot_products};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{Frame, FrameStatus};
#[cfg(any(test, feature = "hydrate"))]
use crate::state::alerts::{AlertKind, AlertsState};
#[cfg(any(test, feature = "hydrate"))]
use crate::state::products::ProductsState;

/// Auto-dismiss delay for save confirmations.
#[cfg(any(test, feature = "hydrate"))]
const SAVE_TOAST_MS: u32 = 2000;
/// Auto-dismiss delay for delete confirmations.
#[cfg(any(test, feature = "hydrate"))]
const DELETE_TOAST_MS: u32 = 1500;

#[cfg(feature = "hydrate")]
pub(super) fn handle_product_frame(
    frame: &Frame,
    products: leptos::prelude::RwSignal<ProductsState>,
    alerts: leptos::prelude::RwSignal<AlertsState>,
) -> bool {
    use leptos::prelude::Update;

    if !frame.syscall.starts_with("product:") {
        return false;
    }

    let mut handled = false;
    products.update(|p| {
        alerts.update(|a| {
            handled = apply_product_frame(frame, p, a);
        });
    });
    handled
}

/// Apply one `product:*` frame to the inventory and alert state.
///
/// Returns `true` when the frame was consumed, including malformed snapshots
/// (dropped whole rather than applied partially).
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_product_frame(
    frame: &Frame,
    products: &mut ProductsState,
    alerts: &mut AlertsState,
) -> bool {
    let Some(op) = frame.syscall.strip_prefix("product:") else {
        return false;
    };

    match (op, frame.status) {
        ("snapshot", FrameStatus::Item) => {
            if let Some(items) = parse_snapshot_products(&frame.data) {
                products.apply_snapshot(items);
            }
            true
        }
        // Subscribe acks carry no state; registration effects arrive as
        // snapshot items.
        ("subscribe", _) => true,
        ("create", FrameStatus::Done) => {
            products.save_pending = false;
            products.close_editor();
            alerts.show(
                AlertKind::Success,
                "¡Registrado!",
                "Se ha guardado correctamente.",
                Some(SAVE_TOAST_MS),
            );
            true
        }
        ("update", FrameStatus::Done) => {
            products.save_pending = false;
            products.close_editor();
            alerts.show(
                AlertKind::Success,
                "¡Actualizado!",
                "El producto se modificó correctamente.",
                Some(SAVE_TOAST_MS),
            );
            true
        }
        ("delete", FrameStatus::Done) => {
            products.delete_pending = false;
            alerts.show(
                AlertKind::Success,
                "¡Eliminado!",
                "El producto ha sido borrado.",
                Some(DELETE_TOAST_MS),
            );
            true
        }
        ("create" | "update", FrameStatus::Error) => {
            // Editor stays open with the typed values so the user can retry.
            products.save_pending = false;
            let body = frame_error_message(frame)
                .unwrap_or("Hubo un problema de conexión.")
                .to_owned();
            alerts.show(AlertKind::Error, "Error", body, None);
            true
        }
        ("delete", FrameStatus::Error) => {
            products.delete_pending = false;
            let body = frame_error_message(frame)
                .unwrap_or("Problema al eliminar.")
                .to_owned();
            alerts.show(AlertKind::Error, "Error", body, None);
            true
        }
        _ => false,
    }
}
