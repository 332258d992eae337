//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns every shared signal (auth, products, alerts, ui, frame sender)
//! and provides them as contexts. The websocket task is spawned once, after
//! the session check confirms a user, and its sender handle is published
//! through the [`FrameSender`] context so any component can emit frames.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::alert_host::AlertHost;
use crate::pages::dashboard::{DashboardHome, DashboardShell};
use crate::pages::inventory::InventoryPage;
use crate::pages::login::LoginPage;
use crate::pages::placeholder::PlaceholderPage;
use crate::state::alerts::AlertsState;
use crate::state::auth::AuthState;
use crate::state::products::ProductsState;
use crate::state::ui::UiState;

/// Handle components use to push frames to the websocket task.
///
/// Defaults to a disconnected handle; the real channel is installed once the
/// frame client spawns. On the server there is never a socket, so `send` is
/// always a no-op there.
#[derive(Clone, Default)]
pub struct FrameSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<Vec<u8>>>,
}

impl FrameSender {
    /// Wrap a live channel to the websocket task.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<Vec<u8>>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Encode and queue a frame. Returns `false` when no socket task exists
    /// or the channel is closed.
    pub fn send(&self, frame: &crate::net::types::Frame) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| crate::net::frame_client::send_frame(tx, frame))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = frame;
            false
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let products = RwSignal::new(ProductsState::default());
    let alerts = RwSignal::new(AlertsState::default());
    let ui = RwSignal::new(UiState::default());
    let sender = RwSignal::new(FrameSender::default());

    provide_context(auth);
    provide_context(products);
    provide_context(alerts);
    provide_context(ui);
    provide_context(sender);

    #[cfg(feature = "hydrate")]
    {
        // Resolve the session once at startup; until this lands the auth
        // guard treats the session as pending.
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });

        // Spawn the websocket task the first time a user is present.
        let started = RwSignal::new(false);
        Effect::new(move || {
            if auth.get().user.is_none() || started.get_untracked() {
                return;
            }
            started.set(true);
            let tx = crate::net::frame_client::spawn_frame_client(products, alerts);
            sender.set(FrameSender::new(tx));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/vigia-erp.css"/>
        <Title text="Vigía ERP"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardShell>
                    <Route path=StaticSegment("") view=DashboardHome/>
                    <Route path=StaticSegment("inventory") view=InventoryPage/>
                    <Route
                        path=StaticSegment("sales")
                        view=|| view! { <PlaceholderPage title="Ventas"/> }
                    />
                    <Route
                        path=StaticSegment("clients")
                        view=|| view! { <PlaceholderPage title="Clientes"/> }
                    />
                    <Route
                        path=StaticSegment("movements")
                        view=|| view! { <PlaceholderPage title="Movimientos"/> }
                    />
                    <Route
                        path=StaticSegment("settings")
                        view=|| view! { <PlaceholderPage title="Configuración"/> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
        <AlertHost/>
    }
}
