use super::*;
use crate::state::test_helpers;
use frames::Status;
use serde_json::json;
use tokio::sync::mpsc;

/// Encode a client frame the way the hydrated client builds them:
/// fresh id, no parent, ts zero. Returns the id for parent assertions.
fn client_frame(syscall: &str, status: Status, data: Value) -> (String, Vec<u8>) {
    let frame = Frame {
        id: Uuid::new_v4().to_string(),
        parent_id: None,
        ts: 0,
        from: None,
        syscall: syscall.into(),
        status,
        data,
    };
    let bytes = frames::encode_frame(&frame);
    (frame.id, bytes)
}

async fn process(
    state: &AppState,
    subscribed: &mut bool,
    client_id: Uuid,
    client_tx: &mpsc::Sender<Frame>,
    bytes: &[u8],
) -> Vec<Frame> {
    process_inbound(state, subscribed, client_id, Uuid::new_v4(), client_tx, bytes).await
}

#[tokio::test]
async fn undecodable_bytes_produce_gateway_error() {
    let state = test_helpers::test_app_state();
    let (tx, _rx) = mpsc::channel(8);
    let mut subscribed = false;

    let out = process(&state, &mut subscribed, Uuid::new_v4(), &tx, b"not a frame").await;

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].syscall, "gateway:error");
    assert_eq!(out[0].status, Status::Error);
    assert!(out[0].parent_id.is_none());
    let message = out[0].data["message"].as_str().unwrap_or_default();
    assert!(message.starts_with("invalid frame:"), "got: {message}");
}

#[tokio::test]
async fn unknown_prefix_gets_error_reply() {
    let state = test_helpers::test_app_state();
    let (tx, _rx) = mpsc::channel(8);
    let mut subscribed = false;

    let (req_id, bytes) = client_frame("board:create", Status::Request, json!({}));
    let out = process(&state, &mut subscribed, Uuid::new_v4(), &tx, &bytes).await;

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].status, Status::Error);
    assert_eq!(out[0].parent_id.as_deref(), Some(req_id.as_str()));
    assert_eq!(out[0].data["message"], "unknown prefix: board");
}

#[tokio::test]
async fn unknown_product_op_gets_error_reply() {
    let state = test_helpers::test_app_state();
    let (tx, _rx) = mpsc::channel(8);
    let mut subscribed = false;

    let (req_id, bytes) = client_frame("product:promote", Status::Request, json!({}));
    let out = process(&state, &mut subscribed, Uuid::new_v4(), &tx, &bytes).await;

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].status, Status::Error);
    assert_eq!(out[0].parent_id.as_deref(), Some(req_id.as_str()));
    assert_eq!(out[0].data["message"], "unknown product op: promote");
}

#[tokio::test]
async fn non_request_statuses_are_dropped() {
    let state = test_helpers::test_app_state();
    let (tx, _rx) = mpsc::channel(8);
    let mut subscribed = false;

    let (_, bytes) = client_frame("product:create", Status::Item, json!({}));
    let out = process(&state, &mut subscribed, Uuid::new_v4(), &tx, &bytes).await;
    assert!(out.is_empty());

    let (_, bytes) = client_frame("product:create", Status::Done, json!({}));
    let out = process(&state, &mut subscribed, Uuid::new_v4(), &tx, &bytes).await;
    assert!(out.is_empty());
}

#[tokio::test]
async fn subscribe_registers_the_client() {
    let state = test_helpers::test_app_state();
    let (tx, _rx) = mpsc::channel(8);
    let mut subscribed = false;
    let client_id = Uuid::new_v4();

    let (_, bytes) = client_frame("product:subscribe", Status::Request, json!({}));
    let _ = process(&state, &mut subscribed, client_id, &tx, &bytes).await;

    assert!(subscribed);
    assert!(state.subscribers.read().await.contains_key(&client_id));
}

#[tokio::test]
async fn subscribe_cancel_deregisters_and_stays_silent() {
    let state = test_helpers::test_app_state();
    let (client_id, _rx) = test_helpers::seed_subscriber(&state).await;
    let (tx, _tx_rx) = mpsc::channel(8);
    let mut subscribed = true;

    let (_, bytes) = client_frame("product:subscribe", Status::Cancel, json!({}));
    let out = process(&state, &mut subscribed, client_id, &tx, &bytes).await;

    assert!(out.is_empty());
    assert!(!subscribed);
    assert!(!state.subscribers.read().await.contains_key(&client_id));
}

#[tokio::test]
async fn cancel_without_subscription_is_a_no_op() {
    let state = test_helpers::test_app_state();
    let (tx, _rx) = mpsc::channel(8);
    let mut subscribed = false;

    let (_, bytes) = client_frame("product:subscribe", Status::Cancel, json!({}));
    let out = process(&state, &mut subscribed, Uuid::new_v4(), &tx, &bytes).await;

    assert!(out.is_empty());
    assert!(!subscribed);
    assert!(state.subscribers.read().await.is_empty());
}

#[tokio::test]
async fn create_with_blank_name_fails_validation_before_any_query() {
    let state = test_helpers::test_app_state();
    let (tx, _rx) = mpsc::channel(8);
    let mut subscribed = false;

    let (req_id, bytes) = client_frame(
        "product:create",
        Status::Request,
        json!({
            "name": "   ",
            "category": "CCTV",
            "cost": 10.0,
            "price": 20.0,
            "stock": 5,
            "min_stock": 2,
        }),
    );
    let out = process(&state, &mut subscribed, Uuid::new_v4(), &tx, &bytes).await;

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].status, Status::Error);
    assert_eq!(out[0].parent_id.as_deref(), Some(req_id.as_str()));
    assert_eq!(out[0].data["code"], "E_INVALID");
    assert_eq!(out[0].data["message"], "El nombre es obligatorio.");
    assert_eq!(out[0].data["retryable"], false);
}

#[tokio::test]
async fn create_with_unknown_category_is_rejected() {
    let state = test_helpers::test_app_state();
    let (tx, _rx) = mpsc::channel(8);
    let mut subscribed = false;

    let (_, bytes) = client_frame(
        "product:create",
        Status::Request,
        json!({
            "name": "Cámara domo",
            "category": "Drones",
            "cost": 10.0,
            "price": 20.0,
            "stock": 5,
            "min_stock": 2,
        }),
    );
    let out = process(&state, &mut subscribed, Uuid::new_v4(), &tx, &bytes).await;

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].data["code"], "E_INVALID");
    assert_eq!(out[0].data["message"], "Selecciona una categoría válida.");
}

#[tokio::test]
async fn update_without_id_is_rejected() {
    let state = test_helpers::test_app_state();
    let (tx, _rx) = mpsc::channel(8);
    let mut subscribed = false;

    let (req_id, bytes) = client_frame(
        "product:update",
        Status::Request,
        json!({
            "name": "Panel solar",
            "category": "Solar",
            "cost": 100.0,
            "price": 150.0,
            "stock": 3,
            "min_stock": 1,
        }),
    );
    let out = process(&state, &mut subscribed, Uuid::new_v4(), &tx, &bytes).await;

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].status, Status::Error);
    assert_eq!(out[0].parent_id.as_deref(), Some(req_id.as_str()));
    assert_eq!(out[0].data["message"], "id required");
}

#[tokio::test]
async fn delete_with_malformed_id_is_rejected() {
    let state = test_helpers::test_app_state();
    let (tx, _rx) = mpsc::channel(8);
    let mut subscribed = false;

    let (_, bytes) = client_frame(
        "product:delete",
        Status::Request,
        json!({ "id": "not-a-uuid" }),
    );
    let out = process(&state, &mut subscribed, Uuid::new_v4(), &tx, &bytes).await;

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].status, Status::Error);
    assert_eq!(out[0].data["message"], "id required");
}
