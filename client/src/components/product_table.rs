//! Desktop table layout for the inventory list.
//!
//! Rows render in snapshot order; low-stock rows pick up a warning badge so
//! restock candidates stand out without sorting tricks.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::money::format_price;

/// Inventory table for wide viewports.
#[component]
pub fn ProductTable(
    #[prop(into)] items: Signal<Vec<Product>>,
    on_edit: Callback<Product>,
    on_delete: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="product-table-wrap">
            <table class="product-table">
                <thead>
                    <tr>
                        <th>"Producto"</th>
                        <th>"Categoría"</th>
                        <th>"Precio"</th>
                        <th>"Stock"</th>
                        <th class="product-table__actions-col">"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
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
                                    <tr class="product-table__row" class:product-table__row--low=low>
                                        <td>
                                            <div class="product-table__name">{p.name.clone()}</div>
                                            <div class="product-table__sku">{sku}</div>
                                        </td>
                                        <td>
                                            <span class="product-table__category">{p.category.clone()}</span>
                                        </td>
                                        <td class="product-table__price">{format_price(p.price)}</td>
                                        <td>
                                            <span
                                                class="product-table__stock"
                                                class:product-table__stock--low=low
                                            >
                                                {p.stock}
                                                <Show when=move || low>
                                                    <span class="product-table__stock-flag" title="Stock bajo">
                                                        "⚠"
                                                    </span>
                                                </Show>
                                            </span>
                                        </td>
                                        <td class="product-table__actions">
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
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}
