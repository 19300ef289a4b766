//! The product catalog entry: both raw materials and sellable goods, with the
//! authoritative `stock` counter that every production run mutates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Whether a product is a consumable input or a sellable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// Consumable input to a production run.
    Raw,
    /// Sellable output of a production run.
    Selling,
}

/// A product in the inventory.
///
/// `stock` is never negative: creation and update reject negative values, and
/// the only debit paths are the conditional [`Consume`](crate::product_actor::ProductAction::Consume)
/// and the clamped [`Revoke`](crate::product_actor::ProductAction::Revoke) actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub stock: f64,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub supplier: Option<String>,
    pub last_restocked: DateTime<Utc>,
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub stock: f64,
    pub product_type: ProductType,
    pub supplier: Option<String>,
}

impl ProductCreate {
    /// A raw material with no category or supplier reference.
    pub fn raw(name: impl Into<String>, price: f64, stock: f64) -> Self {
        Self {
            name: name.into(),
            category: None,
            price,
            stock,
            product_type: ProductType::Raw,
            supplier: None,
        }
    }

    /// A sellable product with no category or supplier reference.
    pub fn selling(name: impl Into<String>, price: f64, stock: f64) -> Self {
        Self {
            name: name.into(),
            category: None,
            price,
            stock,
            product_type: ProductType::Selling,
            supplier: None,
        }
    }
}

/// Payload for updating an existing product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: Option<f64>,
    pub stock: Option<f64>,
    pub category: Option<String>,
}
