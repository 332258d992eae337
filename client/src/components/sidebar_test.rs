use super::{NAV_ITEMS, is_active};

#[test]
fn dashboard_root_is_exact_match_only() {
    assert!(is_active("/dashboard", "/dashboard"));
    assert!(is_active("/dashboard/", "/dashboard"));
    assert!(!is_active("/dashboard/inventory", "/dashboard"));
}

#[test]
fn section_links_match_their_subtree() {
    assert!(is_active("/dashboard/inventory", "/dashboard/inventory"));
    assert!(!is_active("/dashboard/sales", "/dashboard/inventory"));
    assert!(!is_active("/dashboard/inventory-old", "/dashboard/inventory"));
}

#[test]
fn nav_covers_every_app_section() {
    let hrefs: Vec<&str> = NAV_ITEMS.iter().map(|item| item.href).collect();
    assert_eq!(
        hrefs,
        vec![
            "/dashboard",
            "/dashboard/inventory",
            "/dashboard/sales",
            "/dashboard/clients",
            "/dashboard/movements",
            "/dashboard/settings",
        ]
    );
}
