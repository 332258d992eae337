//! Networking modules for HTTP + websocket frame protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls (auth), `frame_client` manages the websocket
//! lifecycle, `requests` builds outbound product frames, and `types` defines
//! the shared wire schema.

pub mod api;
pub mod frame_client;
pub mod requests;
pub mod types;
