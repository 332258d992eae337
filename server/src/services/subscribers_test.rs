use super::*;
use crate::state::test_helpers;
use tokio::time::{Duration, timeout};

async fn recv_frame(rx: &mut mpsc::Receiver<Frame>) -> Frame {
    timeout(Duration::from_millis(200), rx.recv())
        .await
        .expect("frame receive timed out")
        .expect("channel closed")
}

async fn assert_channel_empty(rx: &mut mpsc::Receiver<Frame>) {
    assert!(
        timeout(Duration::from_millis(80), rx.recv()).await.is_err(),
        "expected channel to remain empty"
    );
}

#[test]
fn snapshot_frame_shape() {
    let rows = vec![ProductRow {
        id: Uuid::nil(),
        name: "Cámara Bullet".into(),
        sku: Some("CAM-002".into()),
        category: "CCTV".into(),
        price: 950.0,
        cost: 600.0,
        stock: 2,
        min_stock: 4,
    }];

    let frame = snapshot_frame(&rows);

    assert_eq!(frame.syscall, "product:snapshot");
    assert_eq!(frame.status, Status::Item);
    assert!(frame.parent_id.is_none());
    let products = frame.data["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Cámara Bullet");
    assert_eq!(products[0]["sku"], "CAM-002");
}

#[test]
fn snapshot_frame_empty_catalog() {
    let frame = snapshot_frame(&[]);
    assert_eq!(frame.data["products"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn broadcast_reaches_every_subscriber() {
    let state = test_helpers::test_app_state();
    let (_, mut rx_a) = test_helpers::seed_subscriber(&state).await;
    let (_, mut rx_b) = test_helpers::seed_subscriber(&state).await;

    broadcast(&state, &snapshot_frame(&[])).await;

    assert_eq!(recv_frame(&mut rx_a).await.syscall, "product:snapshot");
    assert_eq!(recv_frame(&mut rx_b).await.syscall, "product:snapshot");
}

#[tokio::test]
async fn removed_subscriber_stops_receiving() {
    let state = test_helpers::test_app_state();
    let (client_a, mut rx_a) = test_helpers::seed_subscriber(&state).await;
    let (_, mut rx_b) = test_helpers::seed_subscriber(&state).await;

    remove(&state, client_a).await;
    // Second remove is a no-op.
    remove(&state, client_a).await;

    broadcast(&state, &snapshot_frame(&[])).await;

    assert_channel_empty(&mut rx_a).await;
    assert_eq!(recv_frame(&mut rx_b).await.syscall, "product:snapshot");
}

#[tokio::test]
async fn register_then_broadcast_delivers() {
    let state = test_helpers::test_app_state();
    let client_id = Uuid::new_v4();
    let (tx, mut rx) = mpsc::channel::<Frame>(8);

    register(&state, client_id, tx).await;
    broadcast(&state, &snapshot_frame(&[])).await;

    assert_eq!(recv_frame(&mut rx).await.status, Status::Item);
}

#[tokio::test]
async fn broadcast_skips_full_channels() {
    let state = test_helpers::test_app_state();
    let client_id = Uuid::new_v4();
    let (tx, mut rx) = mpsc::channel::<Frame>(1);
    register(&state, client_id, tx).await;

    broadcast(&state, &snapshot_frame(&[])).await;
    // Channel is now full; the second push is dropped, not blocked on.
    broadcast(&state, &snapshot_frame(&[])).await;

    let _ = recv_frame(&mut rx).await;
    assert_channel_empty(&mut rx).await;
}
