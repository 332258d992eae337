//! Placeholder for dashboard sections that are not built yet.

use leptos::prelude::*;

/// Stub section shown for routes whose module has not landed.
#[component]
pub fn PlaceholderPage(title: &'static str) -> impl IntoView {
    view! {
        <section class="placeholder-page">
            <h1 class="placeholder-page__title">{title}</h1>
            <p class="placeholder-page__hint">"Sección en construcción"</p>
        </section>
    }
}
