use super::*;
use crate::net::types::{Frame, FrameStatus};

fn frame_with(data: serde_json::Value) -> Frame {
    Frame {
        id: "f1".to_owned(),
        parent_id: None,
        ts: 123,
        from: Some("u1".to_owned()),
        syscall: "test".to_owned(),
        status: FrameStatus::Done,
        data,
    }
}

#[test]
fn pick_str_returns_first_matching_string_key() {
    let data = serde_json::json!({ "a": 1, "b": "two", "c": "three" });
    assert_eq!(pick_str(&data, &["x", "b", "c"]), Some("two"));
    assert_eq!(pick_str(&data, &["x", "y"]), None);
}

#[test]
fn frame_error_message_prefers_message_then_error() {
    let one = frame_with(serde_json::json!({ "message": "m1", "error": "e1" }));
    let two = frame_with(serde_json::json!({ "error": "e1" }));
    let three = frame_with(serde_json::json!({}));
    assert_eq!(frame_error_message(&one), Some("m1"));
    assert_eq!(frame_error_message(&two), Some("e1"));
    assert_eq!(frame_error_message(&three), None);
}

#[test]
fn parse_snapshot_products_reads_a_full_payload() {
    let data = serde_json::json!({
        "products": [
            {
                "id": "p1",
                "name": "Cámara Bala 4MP",
                "sku": "CAM-002",
                "category": "CCTV",
                "price": 120.0,
                "cost": 80.0,
                "stock": 6,
                "min_stock": 2
            },
            {
                "id": "p2",
                "name": "Panel Solar 100W",
                "sku": null,
                "category": "Solar",
                "price": 95.0,
                "cost": 60.0,
                "stock": 0,
                "min_stock": 1
            }
        ]
    });
    let products = parse_snapshot_products(&data).expect("snapshot should parse");
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Cámara Bala 4MP");
    assert_eq!(products[1].sku, None);
    assert_eq!(products[1].stock, 0);
}

#[test]
fn parse_snapshot_products_accepts_float_encoded_integers() {
    // Wire payloads normalize all numbers to f64.
    let data = serde_json::json!({
        "products": [{
            "id": "p1",
            "name": "DVR 8 canales",
            "sku": "DVR-008",
            "category": "CCTV",
            "price": 210.0,
            "cost": 150.0,
            "stock": 4.0,
            "min_stock": 2.0
        }]
    });
    let products = parse_snapshot_products(&data).expect("snapshot should parse");
    assert_eq!(products[0].stock, 4);
    assert_eq!(products[0].min_stock, 2);
}

#[test]
fn parse_snapshot_products_rejects_payloads_without_products() {
    assert_eq!(parse_snapshot_products(&serde_json::json!({})), None);
    assert_eq!(
        parse_snapshot_products(&serde_json::json!({ "products": "nope" })),
        None
    );
}

#[test]
fn parse_snapshot_products_drops_a_snapshot_with_a_malformed_row() {
    let data = serde_json::json!({
        "products": [
            { "id": "p1" },
            {
                "id": "p2",
                "name": "Completo",
                "sku": null,
                "category": "GPS",
                "price": 1.0,
                "cost": 1.0,
                "stock": 1,
                "min_stock": 1
            }
        ]
    });
    assert_eq!(parse_snapshot_products(&data), None);
}

#[test]
fn parse_snapshot_products_accepts_an_empty_collection() {
    let data = serde_json::json!({ "products": [] });
    assert_eq!(parse_snapshot_products(&data), Some(Vec::new()));
}
