//! Stacked card layout for the inventory list on narrow viewports.
//!
//! Shows the same fields and actions as the table; CSS decides which of the
//! two layouts is visible at a given breakpoint.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::money::format_price;

/// Inventory cards for phone-width viewports.
#[component]
pub fn ProductCards(
    #[prop(into)] items: Signal<Vec<Product>>,
    on_edit: Callback<Product>,
    on_delete: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="product-cards">
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|p| {
                        let low = p.is_low_stock();
                        let sku = p.sku_display().to_owned();
                        let edit_target = p.clone();
                        let delete_id = p.id.clone();
                        let delete_name = p.name.clone();
                        view! {
                            <div class="product-card" class:product-card--low=low>
                                <div class="product-card__head">
                                    <span class="product-card__name">{p.name.clone()}</span>
                                    <span class="product-card__category">{p.category.clone()}</span>
                                </div>
                                <div class="product-card__sku">{sku}</div>
                                <div class="product-card__figures">
                                    <span class="product-card__price">{format_price(p.price)}</span>
                                    <span
                                        class="product-card__stock"
                                        class:product-card__stock--low=low
                                    >
                                        "Stock: "
                                        {p.stock}
                                        <Show when=move || low>
                                            <span class="product-card__stock-flag" title="Stock bajo">
                                                "⚠"
                                            </span>
                                        </Show>
                                    </span>
                                </div>
                                <div class="product-card__actions">
                                    <button
                                        class="btn btn--ghost"
                                        on:click=move |_| on_edit.run(edit_target.clone())
                                    >
                                        "Editar"
                                    </button>
                                    <button
                                        class="btn btn--ghost btn--danger"
                                        on:click=move |_| {
                                            on_delete.run((delete_id.clone(), delete_name.clone()));
                                        }
                                    >
                                        "Eliminar"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
