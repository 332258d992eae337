use super::*;

fn product(name: &str, sku: Option<&str>) -> Product {
    Product {
        id: format!("id-{name}"),
        name: name.to_owned(),
        sku: sku.map(str::to_owned),
        category: "CCTV".to_owned(),
        price: 10.0,
        cost: 5.0,
        stock: 1,
        min_stock: 1,
    }
}

#[test]
fn empty_term_keeps_everything_in_order() {
    let products = vec![
        product("Alarma", Some("AL-1")),
        product("Cámara bala", None),
        product("Panel solar", Some("PS-9")),
    ];

    let filtered = filter_products(&products, "");
    assert_eq!(filtered, products);
}

#[test]
fn term_matches_name_case_insensitively() {
    let products = vec![
        product("Cámara Domo 2MP", Some("CAM-001")),
        product("Panel solar", Some("PS-9")),
    ];

    let filtered = filter_products(&products, "domo");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Cámara Domo 2MP");
}

#[test]
fn term_matches_sku_case_insensitively() {
    let products = vec![
        product("Cámara Domo 2MP", Some("CAM-001")),
        product("Panel solar", Some("PS-9")),
    ];

    let filtered = filter_products(&products, "cam-0");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].sku.as_deref(), Some("CAM-001"));
}

#[test]
fn name_and_sku_matches_are_ored() {
    let products = vec![
        product("Kit GPS", Some("TRK-7")),
        product("Rastreador", Some("GPS-2")),
        product("Cable", Some("CB-1")),
    ];

    // "gps" hits the first by name and the second by sku.
    let filtered = filter_products(&products, "gps");
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].name, "Kit GPS");
    assert_eq!(filtered[1].name, "Rastreador");
}

#[test]
fn missing_or_empty_sku_only_matches_by_name() {
    let products = vec![product("Sensor", None), product("Sirena", Some(""))];

    assert!(filter_products(&products, "sen").len() == 1);
    assert!(filter_products(&products, "xyz").is_empty());
}

#[test]
fn order_is_preserved_among_matches() {
    let products = vec![
        product("Cámara A", None),
        product("Sensor", None),
        product("Cámara B", None),
    ];

    let filtered = filter_products(&products, "cámara");
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].name, "Cámara A");
    assert_eq!(filtered[1].name, "Cámara B");
}

#[test]
fn no_match_yields_empty_result() {
    let products = vec![product("Alarma", Some("AL-1"))];
    assert!(filter_products(&products, "inexistente").is_empty());
}

#[test]
fn filter_is_pure_given_same_inputs() {
    let products = vec![product("Alarma", Some("AL-1")), product("Cámara", None)];
    let first = filter_products(&products, "al");
    let second = filter_products(&products, "al");
    assert_eq!(first, second);
}
