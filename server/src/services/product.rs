//! Product catalog service — draft parsing, validation, CRUD.
//!
//! DESIGN
//! ======
//! Postgres is the single source of truth; there is no in-memory catalog
//! state to drift. Mutations are plain SQL statements and the caller pushes
//! a fresh ordered snapshot to subscribers afterwards.
//!
//! Drafts arrive as frame payloads that crossed the protobuf codec, which
//! normalizes every number to f64. Integer fields therefore accept
//! integer-valued floats and reject everything else.

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

/// Stored in place of an empty SKU so the code column never goes blank
/// through the gateway.
pub const DEFAULT_SKU: &str = "Sin código";

/// The fixed category taxonomy. Must match the client form options.
pub const CATEGORIES: [&str; 5] = ["CCTV", "GPS", "Solar", "Accesorios", "Servicios"];

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error("El producto no existe.")]
    NotFound(Uuid),
    #[error("Error de base de datos: {0}")]
    Database(#[from] sqlx::Error),
}

impl crate::frame::ErrorCode for ProductError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid(_) => "E_INVALID",
            Self::NotFound(_) => "E_PRODUCT_NOT_FOUND",
            Self::Database(_) => "E_DATABASE",
        }
    }
}

/// One catalog row, as pushed in snapshot payloads.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProductRow {
    pub id: Uuid,
    pub name: String,
    pub sku: Option<String>,
    pub category: String,
    pub price: f64,
    pub cost: f64,
    pub stock: i32,
    pub min_stock: i32,
}

/// Validated product fields, ready to insert or to fully replace a row.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub cost: f64,
    pub price: f64,
    pub stock: i32,
    pub min_stock: i32,
}

impl ProductDraft {
    /// Parse and validate a draft from a frame payload.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` with a user-facing message for the first field
    /// that fails validation.
    pub fn from_data(data: &Value) -> Result<Self, ProductError> {
        let name = data
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default();
        if name.is_empty() {
            return Err(ProductError::Invalid("El nombre es obligatorio."));
        }

        let sku = data
            .get("sku")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default();
        let sku = if sku.is_empty() { DEFAULT_SKU.to_owned() } else { sku.to_owned() };

        let category = data
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if !CATEGORIES.contains(&category) {
            return Err(ProductError::Invalid("Selecciona una categoría válida."));
        }

        let cost = money_field(data, "cost", "El costo debe ser un número mayor o igual a 0.")?;
        let price = money_field(data, "price", "El precio debe ser un número mayor o igual a 0.")?;
        let stock = quantity_field(data, "stock", "El stock debe ser un entero mayor o igual a 0.")?;
        let min_stock = quantity_field(data, "min_stock", "El stock mínimo debe ser un entero mayor o igual a 0.")?;

        Ok(Self {
            name: name.to_owned(),
            sku,
            category: category.to_owned(),
            cost,
            price,
            stock,
            min_stock,
        })
    }
}

fn money_field(data: &Value, key: &str, message: &'static str) -> Result<f64, ProductError> {
    let value = data
        .get(key)
        .and_then(Value::as_f64)
        .ok_or(ProductError::Invalid(message))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ProductError::Invalid(message));
    }
    Ok(value)
}

fn quantity_field(data: &Value, key: &str, message: &'static str) -> Result<i32, ProductError> {
    // Codec artifact: "12" arrives as 12.0. `as_f64` also covers JSON
    // integers, so every number takes this path.
    if let Some(f) = data.get(key).and_then(Value::as_f64) {
        let rounded = f.round();
        if (f - rounded).abs() < 1e-6 && (0.0..=f64::from(i32::MAX)).contains(&rounded) {
            #[allow(clippy::cast_possible_truncation)]
            let value = rounded as i32;
            return Ok(value);
        }
    }
    Err(ProductError::Invalid(message))
}

// =============================================================================
// QUERIES
// =============================================================================

/// Load the full catalog in snapshot order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_products(pool: &PgPool) -> Result<Vec<ProductRow>, ProductError> {
    let rows = sqlx::query_as::<_, (Uuid, String, Option<String>, String, f64, f64, i32, i32)>(
        "SELECT id, name, sku, category, price, cost, stock, min_stock
         FROM products
         ORDER BY name ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, sku, category, price, cost, stock, min_stock)| ProductRow {
            id,
            name,
            sku,
            category,
            price,
            cost,
            stock,
            min_stock,
        })
        .collect())
}

/// Insert a new product. Returns the generated id.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_product(pool: &PgPool, draft: &ProductDraft) -> Result<Uuid, ProductError> {
    let row = sqlx::query_as::<_, (Uuid,)>(
        r"INSERT INTO products (name, sku, category, cost, price, stock, min_stock)
          VALUES ($1, $2, $3, $4, $5, $6, $7)
          RETURNING id",
    )
    .bind(&draft.name)
    .bind(&draft.sku)
    .bind(&draft.category)
    .bind(draft.cost)
    .bind(draft.price)
    .bind(draft.stock)
    .bind(draft.min_stock)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

/// Replace every editable field of an existing product.
///
/// # Errors
///
/// Returns `NotFound` if no row matches the id.
pub async fn update_product(pool: &PgPool, id: Uuid, draft: &ProductDraft) -> Result<(), ProductError> {
    let result = sqlx::query(
        r"UPDATE products
          SET name = $2, sku = $3, category = $4, cost = $5, price = $6, stock = $7, min_stock = $8
          WHERE id = $1",
    )
    .bind(id)
    .bind(&draft.name)
    .bind(&draft.sku)
    .bind(&draft.category)
    .bind(draft.cost)
    .bind(draft.price)
    .bind(draft.stock)
    .bind(draft.min_stock)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ProductError::NotFound(id));
    }
    Ok(())
}

/// Delete a product by id.
///
/// # Errors
///
/// Returns `NotFound` if no row matches the id.
pub async fn delete_product(pool: &PgPool, id: Uuid) -> Result<(), ProductError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ProductError::NotFound(id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "product_test.rs"]
mod tests;
