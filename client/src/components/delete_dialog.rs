//! Delete confirmation dialog.
//!
//! DESIGN
//! ======
//! Nothing is sent until the user confirms against the product's name.
//! Both buttons resolve the pending delete through
//! [`ProductsState::resolve_pending_delete`], which takes the target out of
//! state — so backdrop clicks, cancel, and confirm all close the dialog, and
//! a confirm can produce at most one delete request.

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::net::requests::send_product_delete;
use crate::state::products::ProductsState;

/// Confirmation dialog for the pending product delete.
#[component]
pub fn DeleteProductDialog(
    products: RwSignal<ProductsState>,
    sender: RwSignal<FrameSender>,
) -> impl IntoView {
    let target_name = move || {
        products
            .get()
            .pending_delete
            .map(|d| d.name)
            .unwrap_or_default()
    };

    let on_decline = move |_| {
        products.update(|p| {
            p.resolve_pending_delete(false);
        });
    };

    let on_confirm = move |_| {
        if products.get_untracked().delete_pending {
            return;
        }
        let mut resolved = None;
        products.update(|p| resolved = p.resolve_pending_delete(true));
        if let Some(id) = resolved {
            send_product_delete(sender, &id);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_decline>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"¿Estás seguro?"</h2>
                <p class="dialog__danger">
                    "Vas a eliminar \"" {target_name} "\". Esta acción no se puede deshacer."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=on_decline>
                        "Cancelar"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || products.get().delete_pending
                        on:click=on_confirm
                    >
                        "Sí, eliminar"
                    </button>
                </div>
            </div>
        </div>
    }
}
