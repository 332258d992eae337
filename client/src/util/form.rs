//! Typed parse-and-validate step for the product create/edit form.
//!
//! DESIGN
//! ======
//! The form holds raw strings exactly as typed; `parse` turns them into a
//! typed payload or a structured list of per-field errors. Validation happens
//! entirely before any network call — the server re-checks, but the form
//! never relies on it to reject bad input.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{CATEGORIES, Product};

/// Placeholder stored as SKU when the field is left blank.
pub const DEFAULT_SKU: &str = "Sin código";

/// Raw create/edit form fields, mirroring the inputs as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub cost: String,
    pub price: String,
    pub stock: String,
    pub min_stock: String,
}

/// Parsed, validated payload ready for the mutation gateway.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub cost: f64,
    pub price: f64,
    pub stock: i32,
    pub min_stock: i32,
}

/// Form fields that can carry a validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Category,
    Cost,
    Price,
    Stock,
    MinStock,
}

/// One inline validation error, rendered next to its field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

impl ProductForm {
    /// Empty form with the same starting values the create modal shows:
    /// stock 0, minimum stock 2.
    #[must_use]
    pub fn for_create() -> Self {
        Self {
            stock: "0".to_owned(),
            min_stock: "2".to_owned(),
            ..Self::default()
        }
    }

    /// Prefill from an existing product for edit mode.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone().unwrap_or_default(),
            category: product.category.clone(),
            cost: format_number(product.cost),
            price: format_number(product.price),
            stock: product.stock.to_string(),
            min_stock: product.min_stock.to_string(),
        }
    }

    /// Validate and convert into a typed payload.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once so the form can mark all of them
    /// in a single pass.
    pub fn parse(&self) -> Result<ProductInput, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError { field: FormField::Name, message: "El nombre es obligatorio" });
        }

        if !CATEGORIES.contains(&self.category.as_str()) {
            errors.push(FieldError {
                field: FormField::Category,
                message: "Selecciona una categoría",
            });
        }

        let cost = parse_decimal(&self.cost, FormField::Cost, &mut errors);
        let price = parse_decimal(&self.price, FormField::Price, &mut errors);
        let stock = parse_quantity(&self.stock, FormField::Stock, &mut errors);
        let min_stock = parse_quantity(&self.min_stock, FormField::MinStock, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        let sku = if self.sku.is_empty() { DEFAULT_SKU.to_owned() } else { self.sku.clone() };

        Ok(ProductInput {
            name: name.to_owned(),
            sku,
            category: self.category.clone(),
            cost,
            price,
            stock,
            min_stock,
        })
    }
}

/// First error message recorded for a field, if any.
#[must_use]
pub fn error_for(errors: &[FieldError], field: FormField) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

fn parse_decimal(raw: &str, field: FormField, errors: &mut Vec<FieldError>) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(FieldError { field, message: "Obligatorio" });
        return 0.0;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        Ok(_) => {
            errors.push(FieldError { field, message: "Debe ser mayor o igual a 0" });
            0.0
        }
        Err(_) => {
            errors.push(FieldError { field, message: "Número inválido" });
            0.0
        }
    }
}

fn parse_quantity(raw: &str, field: FormField, errors: &mut Vec<FieldError>) -> i32 {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(FieldError { field, message: "Obligatorio" });
        return 0;
    }
    match raw.parse::<i32>() {
        Ok(value) if value >= 0 => value,
        Ok(_) => {
            errors.push(FieldError { field, message: "Debe ser mayor o igual a 0" });
            0
        }
        Err(_) => {
            errors.push(FieldError { field, message: "Número inválido" });
            0
        }
    }
}

/// Render a stored decimal the way the inputs expect it ("60", "60.5").
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
