//! # client
//!
//! Leptos + WASM frontend for the Vigía ERP business-management application.
//!
//! This crate contains pages, components, application state, network types,
//! the REST helpers, and the WebSocket frame client that keeps the product
//! inventory synchronized with the server in real time.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
