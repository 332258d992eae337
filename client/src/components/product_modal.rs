//! Create/edit product modal.
//!
//! DESIGN
//! ======
//! The modal owns a raw [`ProductForm`] seeded from the editor state at mount:
//! edit mode prefills from the product being edited, create mode starts from
//! the defaults. Submit parses locally first; only a fully valid payload is
//! sent. While the request is in flight the submit control is disabled, and
//! the modal closes only when the server confirms — an error re-enables the
//! form with the typed values intact.

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::net::requests::{send_product_create, send_product_update};
use crate::net::types::CATEGORIES;
use crate::state::products::ProductsState;
use crate::util::form::{FieldError, FormField, ProductForm, error_for};

/// Modal dialog for creating or editing a product.
#[component]
pub fn ProductModal(
    products: RwSignal<ProductsState>,
    sender: RwSignal<FrameSender>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing_id = products
        .get_untracked()
        .editing
        .as_ref()
        .map(|p| p.id.clone());
    let is_edit = editing_id.is_some();

    let form = RwSignal::new(
        products
            .get_untracked()
            .editing
            .as_ref()
            .map_or_else(ProductForm::for_create, ProductForm::from_product),
    );
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let submit = Callback::new(move |()| {
        if products.get_untracked().save_pending {
            return;
        }
        match form.get_untracked().parse() {
            Err(errs) => errors.set(errs),
            Ok(input) => {
                errors.set(Vec::new());
                products.update(|p| p.save_pending = true);
                match &editing_id {
                    Some(id) => send_product_update(sender, id, &input),
                    None => send_product_create(sender, &input),
                }
            }
        }
    });

    let field_error = move |field: FormField| {
        move || {
            error_for(&errors.get(), field).map(|msg| {
                view! { <span class="product-modal__error">{msg}</span> }
            })
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog product-modal" on:click=move |ev| ev.stop_propagation()>
                <h2>{if is_edit { "Editar Producto" } else { "Nuevo Producto" }}</h2>
                <form
                    class="product-modal__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="dialog__label">
                        "Nombre del Producto"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        {field_error(FormField::Name)}
                    </label>

                    <div class="product-modal__grid">
                        <label class="dialog__label">
                            "SKU / Código"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="Ej: CAM-001"
                                prop:value=move || form.get().sku
                                on:input=move |ev| form.update(|f| f.sku = event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Categoría"
                            <select
                                class="dialog__input"
                                prop:value=move || form.get().category
                                on:change=move |ev| {
                                    form.update(|f| f.category = event_target_value(&ev));
                                }
                            >
                                <option value="">"Selecciona..."</option>
                                {CATEGORIES
                                    .iter()
                                    .map(|c| view! { <option value=*c>{*c}</option> })
                                    .collect_view()}
                            </select>
                            {field_error(FormField::Category)}
                        </label>
                    </div>

                    <div class="product-modal__grid">
                        <label class="dialog__label">
                            "Costo ($)"
                            <input
                                class="dialog__input"
                                type="number"
                                step="0.01"
                                min="0"
                                prop:value=move || form.get().cost
                                on:input=move |ev| form.update(|f| f.cost = event_target_value(&ev))
                            />
                            {field_error(FormField::Cost)}
                        </label>
                        <label class="dialog__label">
                            "Precio Venta ($)"
                            <input
                                class="dialog__input"
                                type="number"
                                step="0.01"
                                min="0"
                                prop:value=move || form.get().price
                                on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                            />
                            {field_error(FormField::Price)}
                        </label>
                    </div>

                    <div class="product-modal__grid">
                        <label class="dialog__label">
                            "Stock Actual"
                            <input
                                class="dialog__input"
                                type="number"
                                step="1"
                                min="0"
                                prop:value=move || form.get().stock
                                on:input=move |ev| form.update(|f| f.stock = event_target_value(&ev))
                            />
                            {field_error(FormField::Stock)}
                        </label>
                        <label class="dialog__label">
                            "Stock Mínimo"
                            <input
                                class="dialog__input"
                                type="number"
                                step="1"
                                min="0"
                                prop:value=move || form.get().min_stock
                                on:input=move |ev| {
                                    form.update(|f| f.min_stock = event_target_value(&ev));
                                }
                            />
                            {field_error(FormField::MinStock)}
                        </label>
                    </div>

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancelar"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || products.get().save_pending
                        >
                            {move || {
                                if products.get().save_pending {
                                    "Guardando..."
                                } else {
                                    "Guardar Producto"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
