//! WebSocket frame client for real-time communication with the server.
//!
//! Manages the socket lifecycle: ticket fetch, connection, reconnection with
//! exponential backoff, frame dispatch, and signal updates. It is the bridge
//! between the server's frame protocol and the Leptos UI state.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Parse/transport failures are handled defensively and translated into state
//! updates/logging so the realtime view recovers through the reconnect loop.
//! While disconnected the last snapshot stays on screen; the view shows a
//! reconnect hint from `connection_status` instead of blanking the table.

#[path = "frame_client_parse.rs"]
mod frame_client_parse;
#[path = "frame_client_products.rs"]
mod frame_client_products;

#[cfg(feature = "hydrate")]
use self::frame_client_products::handle_product_frame;

#[cfg(feature = "hydrate")]
use crate::net::types::Frame;
#[cfg(feature = "hydrate")]
use crate::state::alerts::AlertsState;
#[cfg(feature = "hydrate")]
use crate::state::products::{ConnectionStatus, ProductsState};
#[cfg(feature = "hydrate")]
use leptos::prelude::GetUntracked;
#[cfg(feature = "hydrate")]
use leptos::prelude::Update;

/// Send a frame to the server via the shared sender channel.
///
/// Returns `false` if the channel is closed (no active connection).
#[cfg(feature = "hydrate")]
pub fn send_frame(tx: &futures::channel::mpsc::UnboundedSender<Vec<u8>>, frame: &Frame) -> bool {
    tx.unbounded_send(frames::encode_frame(frame)).is_ok()
}

/// Spawn the WebSocket frame client lifecycle as a local async task.
///
/// Connects to the server, handles incoming frames, and reconnects on
/// disconnect with exponential backoff.
#[cfg(feature = "hydrate")]
pub fn spawn_frame_client(
    products: leptos::prelude::RwSignal<ProductsState>,
    alerts: leptos::prelude::RwSignal<AlertsState>,
) -> futures::channel::mpsc::UnboundedSender<Vec<u8>> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
    let tx_clone = tx.clone();

    leptos::task::spawn_local(frame_client_loop(products, alerts, tx_clone, rx));

    tx
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn frame_client_loop(
    products: leptos::prelude::RwSignal<ProductsState>,
    alerts: leptos::prelude::RwSignal<AlertsState>,
    tx: futures::channel::mpsc::UnboundedSender<Vec<u8>>,
    rx: futures::channel::mpsc::UnboundedReceiver<Vec<u8>>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        products.update(|p| p.connection_status = ConnectionStatus::Connecting);

        // Get a WS ticket.
        let ticket = match crate::net::api::create_ws_ticket().await {
            Ok(t) => t,
            Err(e) => {
                leptos::logging::warn!("WS ticket failed: {e}");
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
                backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
                continue;
            }
        };

        // Determine WebSocket URL.
        let location = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let ws_url = format!("{ws_proto}://{host}/api/ws?ticket={ticket}");

        match connect_and_run(&ws_url, products, alerts, &tx, &rx).await {
            Ok(()) => {
                leptos::logging::log!("WS disconnected cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("WS error: {e}");
            }
        }

        products.update(|p| p.connection_status = ConnectionStatus::Disconnected);

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect to the WebSocket and process messages until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    products: leptos::prelude::RwSignal<ProductsState>,
    alerts: leptos::prelude::RwSignal<AlertsState>,
    tx: &futures::channel::mpsc::UnboundedSender<Vec<u8>>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<Vec<u8>>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    products.update(|p| p.connection_status = ConnectionStatus::Connected);

    // Forward outgoing messages from our channel to the WS.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Bytes(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: process incoming frames.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Bytes(bytes)) => {
                    if let Ok(frame) = frames::decode_frame(&bytes) {
                        dispatch_frame(&frame, products, alerts, tx);
                    }
                }
                Ok(Message::Text(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("WS recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run send/recv loops; when either finishes, the connection is done.
    let io_task = async {
        futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    };
    io_task.await;

    Ok(())
}

/// Dispatch an incoming frame to the appropriate state handler.
#[cfg(feature = "hydrate")]
fn dispatch_frame(
    frame: &Frame,
    products: leptos::prelude::RwSignal<ProductsState>,
    alerts: leptos::prelude::RwSignal<AlertsState>,
    tx: &futures::channel::mpsc::UnboundedSender<Vec<u8>>,
) {
    if handle_session_connected_frame(frame, products, tx) {
        return;
    }
    if handle_product_frame(frame, products, alerts) {
        return;
    }
    if frame.syscall == "gateway:error" {
        leptos::logging::warn!("gateway:error frame: {}", frame.data);
    }
}

/// Handle the server's connection greeting.
///
/// A fresh `session:connected` also arrives after every reconnect, so this is
/// where a still-subscribed inventory view re-registers. The stale snapshot
/// stays in place until the server pushes a fresh one.
#[cfg(feature = "hydrate")]
fn handle_session_connected_frame(
    frame: &Frame,
    products: leptos::prelude::RwSignal<ProductsState>,
    tx: &futures::channel::mpsc::UnboundedSender<Vec<u8>>,
) -> bool {
    if frame.syscall != "session:connected" {
        return false;
    }
    products.update(|p| p.connection_status = ConnectionStatus::Connected);
    if products.get_untracked().subscribed {
        let _ = send_frame(tx, &crate::net::requests::product_subscribe_frame());
    }
    true
}
