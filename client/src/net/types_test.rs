use super::*;

#[test]
fn product_deserializes_with_integer_quantities() {
    let product: Product = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "name": "Cámara Domo",
        "sku": "CAM-001",
        "category": "CCTV",
        "price": 1250.5,
        "cost": 800.0,
        "stock": 7,
        "min_stock": 2
    }))
    .expect("deserialize");

    assert_eq!(product.stock, 7);
    assert_eq!(product.min_stock, 2);
}

#[test]
fn product_deserializes_with_float_encoded_quantities() {
    // After the protobuf round trip, integers arrive as floats.
    let product: Product = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "name": "Cámara Domo",
        "sku": null,
        "category": "CCTV",
        "price": 1250.0,
        "cost": 800.0,
        "stock": 7.0,
        "min_stock": 2.0
    }))
    .expect("deserialize");

    assert_eq!(product.stock, 7);
    assert_eq!(product.min_stock, 2);
    assert!(product.sku.is_none());
}

#[test]
fn fractional_quantity_is_rejected() {
    let result: Result<Product, _> = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "name": "Cámara",
        "sku": null,
        "category": "CCTV",
        "price": 1.0,
        "cost": 1.0,
        "stock": 7.5,
        "min_stock": 2.0
    }));
    assert!(result.is_err());
}

#[test]
fn low_stock_fires_at_the_threshold() {
    let mut product: Product = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "name": "Cámara",
        "sku": null,
        "category": "CCTV",
        "price": 1.0,
        "cost": 1.0,
        "stock": 2,
        "min_stock": 2
    }))
    .expect("deserialize");

    // Equality counts as low.
    assert!(product.is_low_stock());

    product.stock = 3;
    assert!(!product.is_low_stock());

    product.stock = 0;
    assert!(product.is_low_stock());
}

#[test]
fn sku_display_falls_back_to_na() {
    let mut product: Product = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "name": "Cámara",
        "sku": "CAM-001",
        "category": "CCTV",
        "price": 1.0,
        "cost": 1.0,
        "stock": 1,
        "min_stock": 1
    }))
    .expect("deserialize");

    assert_eq!(product.sku_display(), "CAM-001");

    product.sku = Some(String::new());
    assert_eq!(product.sku_display(), "N/A");

    product.sku = None;
    assert_eq!(product.sku_display(), "N/A");
}

#[test]
fn category_set_matches_the_form_options() {
    assert_eq!(CATEGORIES, ["CCTV", "GPS", "Solar", "Accesorios", "Servicios"]);
}
