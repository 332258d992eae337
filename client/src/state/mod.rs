//! Shared application state provided via Leptos context.
//!
//! ARCHITECTURE
//! ============
//! One `RwSignal<...State>` per domain, provided at the app root. Components
//! read and update through context; the frame client is the only writer of
//! the synced product cache.

pub mod alerts;
pub mod auth;
pub mod products;
pub mod ui;
