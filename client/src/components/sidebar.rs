//! Main navigation sidebar with branding, section links, and session exit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the dashboard shell on every authenticated page. On narrow
//! viewports the sidebar collapses and the hamburger button toggles it via
//! `UiState::sidebar_open`.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[derive(Clone, Copy)]
struct NavItem {
    label: &'static str,
    href: &'static str,
    icon: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/dashboard", icon: "📊" },
    NavItem { label: "Inventario", href: "/dashboard/inventory", icon: "📦" },
    NavItem { label: "Ventas", href: "/dashboard/sales", icon: "🛒" },
    NavItem { label: "Clientes", href: "/dashboard/clients", icon: "👥" },
    NavItem { label: "Movimientos", href: "/dashboard/movements", icon: "🔁" },
    NavItem { label: "Configuración", href: "/dashboard/settings", icon: "⚙️" },
];

/// Whether a nav entry matches the current path.
///
/// The dashboard root is exact-match only so it does not light up together
/// with its child sections.
fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/dashboard" {
        return pathname == "/dashboard" || pathname == "/dashboard/";
    }
    pathname == href || pathname.starts_with(&format!("{href}/"))
}

/// Navigation sidebar for the dashboard shell.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let confirm_logout = RwSignal::new(false);

    let user_name = move || {
        auth.get()
            .user
            .map_or_else(|| "—".to_owned(), |u| u.name)
    };
    let user_email = move || {
        auth.get()
            .user
            .map_or_else(String::new, |u| u.email)
    };

    let on_logout = move |_| {
        confirm_logout.set(false);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/");
                }
            });
        }
    };

    view! {
        <button
            class="sidebar-toggle"
            on:click=move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open)
            aria-label="Abrir menú"
        >
            "☰"
        </button>

        <aside class="sidebar" class:sidebar--open=move || ui.get().sidebar_open>
            <div class="sidebar__brand">
                <span class="sidebar__brand-name">"Vigía" <span class="sidebar__brand-suffix">"ERP"</span></span>
                <span class="sidebar__brand-tagline">"Gestión Empresarial"</span>
            </div>

            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let href = item.href;
                        let active = {
                            let location = location.clone();
                            move || is_active(&location.pathname.get(), href)
                        };
                        view! {
                            <a
                                class="sidebar__link"
                                class:sidebar__link--active=active
                                href=href
                                on:click=move |_| ui.update(|u| u.sidebar_open = false)
                            >
                                <span class="sidebar__link-icon" aria-hidden="true">{item.icon}</span>
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar__footer">
                <div class="sidebar__user">
                    <span class="sidebar__user-name">{user_name}</span>
                    <span class="sidebar__user-email">{user_email}</span>
                </div>
                <button class="sidebar__logout" on:click=move |_| confirm_logout.set(true)>
                    "Cerrar Sesión"
                </button>
            </div>
        </aside>

        <Show when=move || confirm_logout.get()>
            <div class="dialog-backdrop" on:click=move |_| confirm_logout.set(false)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"¿Cerrar sesión?"</h2>
                    <p>"Tendrás que iniciar sesión de nuevo para continuar."</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| confirm_logout.set(false)>
                            "Cancelar"
                        </button>
                        <button class="btn btn--danger" on:click=on_logout>
                            "Sí, salir"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
