//! Summary card for the dashboard metric grid.

use leptos::prelude::*;

/// One dashboard metric: a label, a headline value, and an icon glyph.
#[component]
pub fn StatCard(title: &'static str, value: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon" aria-hidden="true">{icon}</div>
            <div class="stat-card__meta">
                <span class="stat-card__title">{title}</span>
                <span class="stat-card__value">{value}</span>
            </div>
        </div>
    }
}
