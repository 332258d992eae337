//! Inventory section: the live product list with search, editor, and the
//! delete confirmation flow.
//!
//! DESIGN
//! ======
//! The page subscribes to the product stream for exactly as long as it is
//! mounted. The search box never talks to the server; filtering is a pure
//! function over the snapshot cache, so typing costs nothing on the wire.

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::components::delete_dialog::DeleteProductDialog;
use crate::components::product_cards::ProductCards;
use crate::components::product_modal::ProductModal;
use crate::components::product_table::ProductTable;
use crate::net::requests::{send_product_subscribe, send_product_subscribe_cancel};
use crate::net::types::Product;
use crate::state::products::{ConnectionStatus, ProductsState};
use crate::util::filter::filter_products;

/// Live inventory list for the dashboard's inventory section.
#[component]
pub fn InventoryPage() -> impl IntoView {
    let products = expect_context::<RwSignal<ProductsState>>();
    let sender = expect_context::<RwSignal<FrameSender>>();
    let search = RwSignal::new(String::new());

    // Open the subscription for this visit. If the socket is not up yet the
    // frame client re-subscribes on `session:connected`, so a dropped first
    // request is recovered.
    products.update(|p| p.begin_subscription());
    send_product_subscribe(sender);

    // Teardown closes the state before the cancel frame goes out, so a
    // snapshot racing the cancel finds the subscription already ended. The
    // transition flag keeps the cancel from ever being sent twice.
    on_cleanup(move || {
        let mut ended = false;
        products.update(|p| ended = p.end_subscription());
        if ended {
            send_product_subscribe_cancel(sender);
        }
    });

    let filtered = Signal::derive(move || filter_products(&products.get().items, &search.get()));

    let on_edit = Callback::new(move |product: Product| {
        products.update(|p| p.open_edit(product));
    });
    let on_delete = Callback::new(move |(id, name): (String, String)| {
        products.update(|p| p.request_delete(id, name));
    });
    let on_modal_cancel = Callback::new(move |()| {
        products.update(|p| p.close_editor());
    });

    view! {
        <section class="inventory-page">
            <header class="inventory-page__header">
                <h1 class="inventory-page__title">"Inventario"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| products.update(|p| p.open_create())
                >
                    "+ Añadir Producto"
                </button>
            </header>

            <Show when=move || {
                let state = products.get();
                !state.loading && state.connection_status != ConnectionStatus::Connected
            }>
                <div class="inventory-page__reconnect">
                    "Reconectando..."
                </div>
            </Show>

            <input
                class="inventory-page__search"
                type="search"
                placeholder="Buscar por nombre o SKU..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <Show
                when=move || !products.get().loading
                fallback=move || {
                    view! { <p class="inventory-page__loading">"Cargando inventario..."</p> }
                }
            >
                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=move || {
                        view! {
                            <p class="inventory-page__empty">
                                "No se encontraron productos en la base de datos."
                            </p>
                        }
                    }
                >
                    <ProductTable items=filtered on_edit=on_edit on_delete=on_delete />
                    <ProductCards items=filtered on_edit=on_edit on_delete=on_delete />
                    <p class="inventory-page__count">
                        {move || format!("Mostrando {} producto(s)", filtered.get().len())}
                    </p>
                </Show>
            </Show>

            <Show when=move || products.get().editor_open>
                <ProductModal products=products sender=sender on_cancel=on_modal_cancel />
            </Show>
            <Show when=move || products.get().pending_delete.is_some()>
                <DeleteProductDialog products=products sender=sender />
            </Show>
        </section>
    }
}
