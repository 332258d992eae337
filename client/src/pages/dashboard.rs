//! Dashboard shell and landing section.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DashboardShell` is the parent route for every authenticated section: it
//! enforces the session guard, renders the sidebar, and mounts the active
//! child route in its outlet. `DashboardHome` is the landing section with
//! the metric cards.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::sidebar::Sidebar;
use crate::components::stat_card::StatCard;
use crate::state::auth::AuthState;

/// Authenticated layout: sidebar plus the active section.
#[component]
pub fn DashboardShell() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // Redirect to login once the session check settles without a user.
    let navigate = leptos_router::hooks::use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/", leptos_router::NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-gate">
                        {move || if auth.get().loading { "Cargando..." } else { "Redirigiendo..." }}
                    </div>
                }
            }
        >
            <div class="dashboard-shell">
                <Sidebar />
                <main class="dashboard-shell__content">
                    <Outlet />
                </main>
            </div>
        </Show>
    }
}

/// Landing section with the business metric cards.
///
/// Sales, orders, and client counts are static placeholders until those
/// modules land; inventory is the live section.
#[component]
pub fn DashboardHome() -> impl IntoView {
    view! {
        <section class="dashboard-home">
            <h1 class="dashboard-home__title">"Dashboard"</h1>
            <div class="dashboard-home__stats">
                <StatCard title="Ventas del Día" value="$0.00" icon="💰" />
                <StatCard title="Pedidos Nuevos" value="0" icon="🧾" />
                <StatCard title="Productos Bajos" value="0" icon="📉" />
                <StatCard title="Clientes Totales" value="0" icon="👥" />
            </div>
            <div class="dashboard-home__panel">
                <h2 class="dashboard-home__panel-title">"Actividad Reciente"</h2>
                <p class="dashboard-home__empty">"Aquí irán las gráficas de ventas pronto..."</p>
            </div>
        </section>
    }
}
