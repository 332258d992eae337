//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror server frame payloads so serde round-trips stay
//! lossless. Integer fields use a float-tolerant deserializer because the
//! protobuf payload encoding normalizes every JSON number to f64.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub use frames::Frame;
pub use frames::Status as FrameStatus;

/// The fixed category set offered by the product form. Stored verbatim.
pub const CATEGORIES: [&str; 5] = ["CCTV", "GPS", "Solar", "Accesorios", "Servicios"];

/// A product as carried in `product:snapshot` payloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier (UUID string), assigned by the server.
    pub id: String,
    /// Display name; the snapshot is ordered by this field.
    pub name: String,
    /// Optional stock-keeping code. Absent or empty renders as "N/A".
    pub sku: Option<String>,
    /// One of [`CATEGORIES`].
    pub category: String,
    /// Sale price.
    pub price: f64,
    /// Unit cost.
    pub cost: f64,
    /// On-hand quantity.
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub stock: i32,
    /// Reorder threshold.
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub min_stock: i32,
}

impl Product {
    /// Low-stock indicator: fires at the threshold, not only below it.
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// SKU for display, with the "N/A" fallback for absent or empty codes.
    #[must_use]
    pub fn sku_display(&self) -> &str {
        match self.sku.as_deref() {
            Some(sku) if !sku.is_empty() => sku,
            _ => "N/A",
        }
    }
}

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
}

/// Accept both integer and float JSON numbers for an i32 field.
///
/// Needed because the frame codec routes payloads through protobuf struct
/// values, which only carry f64 numbers.
fn deserialize_i32_from_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).map_err(|_| D::Error::custom("integer out of range for i32"))
            } else if let Some(f) = n.as_f64() {
                let rounded = f.round();
                if (f - rounded).abs() < 1e-6 && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&rounded)
                {
                    #[allow(clippy::cast_possible_truncation)]
                    let value = rounded as i32;
                    Ok(value)
                } else {
                    Err(D::Error::custom("number is not an i32"))
                }
            } else {
                Err(D::Error::custom("unsupported number"))
            }
        }
        _ => Err(D::Error::custom("expected a number")),
    }
}
