//! Synced product inventory state.
//!
//! DESIGN
//! ======
//! The items vector is a replace-only cache: every `product:snapshot` frame
//! carries the complete ordered collection and wholly replaces the previous
//! contents. Nothing else writes `items` — mutations round-trip through the
//! server and come back as the next snapshot. Do not "optimize" this into
//! incremental patching; the ordering guarantee depends on whole replacement.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::types::Product;

/// Connectivity of the WebSocket frame client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// A delete awaiting user confirmation. `name` is shown in the prompt so the
/// user can verify the target before anything is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: String,
    pub name: String,
}

/// Inventory view state: the synced cache plus editor and mutation flags.
#[derive(Clone, Debug, Default)]
pub struct ProductsState {
    /// Complete product set from the last snapshot, ordered by name.
    pub items: Vec<Product>,
    /// True from subscription start until the first snapshot arrives.
    pub loading: bool,
    /// Whether the inventory view holds an active subscription.
    pub subscribed: bool,
    pub connection_status: ConnectionStatus,
    /// Create/edit modal visibility.
    pub editor_open: bool,
    /// Product loaded into the editor; `None` means create mode.
    pub editing: Option<Product>,
    /// A create/update frame is in flight; the submit control is disabled.
    pub save_pending: bool,
    /// Delete confirmation dialog target, if open.
    pub pending_delete: Option<PendingDelete>,
    /// A delete frame is in flight.
    pub delete_pending: bool,
}

impl ProductsState {
    /// Start a subscription: snapshots will be accepted and the loading
    /// indicator shows until the first one lands.
    pub fn begin_subscription(&mut self) {
        self.subscribed = true;
        self.loading = true;
    }

    /// Stop accepting snapshots. Returns `true` only for the call that
    /// actually ended an active subscription, so the caller can send the
    /// cancel frame exactly once. Runs before the cancel frame goes out,
    /// so a racing delivery cannot touch state that belongs to a closed
    /// view.
    pub fn end_subscription(&mut self) -> bool {
        let was_subscribed = self.subscribed;
        self.subscribed = false;
        was_subscribed
    }

    /// Replace the entire cache with a delivered snapshot.
    ///
    /// Deliveries after `end_subscription` are dropped. The first delivery
    /// clears `loading`; later ones never set it back.
    pub fn apply_snapshot(&mut self, products: Vec<Product>) {
        if !self.subscribed {
            return;
        }
        self.items = products;
        self.loading = false;
    }

    pub fn open_create(&mut self) {
        self.editing = None;
        self.editor_open = true;
    }

    pub fn open_edit(&mut self, product: Product) {
        self.editing = Some(product);
        self.editor_open = true;
    }

    pub fn close_editor(&mut self) {
        self.editor_open = false;
        self.editing = None;
    }

    /// Open the delete confirmation dialog for one product.
    pub fn request_delete(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.pending_delete = Some(PendingDelete { id: id.into(), name: name.into() });
    }

    /// Resolve the confirmation dialog. Returns the id to delete when the
    /// user confirmed; a decline returns `None` and nothing else changes
    /// (no notification, no network). Either way the dialog closes, so a
    /// second resolution finds nothing to act on.
    pub fn resolve_pending_delete(&mut self, confirmed: bool) -> Option<String> {
        let pending = self.pending_delete.take()?;
        if !confirmed {
            return None;
        }
        self.delete_pending = true;
        Some(pending.id)
    }
}
