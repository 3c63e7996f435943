//! Product record and its request-side value types.

use serde::{Deserialize, Serialize};

/// A single inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique across the store, immutable once assigned.
    pub id: i64,
    /// Non-empty display name.
    pub name: String,
    /// Unit price, always > 0.
    pub price: f64,
    /// On-hand quantity, always >= 0.
    pub quantity: i64,
}

/// Validated fields of a creation request, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

/// Validated partial update. Absent fields are preserved unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl ProductPatch {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.quantity.is_none()
    }

    /// Merge the present fields over an existing record. The record's
    /// id is never touched.
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
    }
}
