//! Local search filter over the synced product set.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::Product;

/// Case-insensitive substring filter on product name or SKU.
///
/// A product is kept when the lowercased term occurs in the lowercased name,
/// or when a non-empty SKU is present and the term occurs in it. An empty
/// term keeps everything. Input order is preserved (the snapshot is already
/// name-ascending), and the function has no memory between calls.
#[must_use]
pub fn filter_products(products: &[Product], term: &str) -> Vec<Product> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|p| matches_term(p, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn matches_term(product: &Product, needle: &str) -> bool {
    if product.name.to_lowercase().contains(needle) {
        return true;
    }
    product
        .sku
        .as_deref()
        .is_some_and(|sku| !sku.is_empty() && sku.to_lowercase().contains(needle))
}
