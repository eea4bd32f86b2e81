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

/// A product held in the inventory.
///
/// Products are created by the first inbound movement for an unseen name and
/// mutated in place afterwards; they are never deleted. The `name` doubles as
/// the case-insensitive key movements are matched against, so two products
/// may not differ only in casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the ledger)
    /// * `name` - Product name, the case-insensitive matching key
    /// * `price` - Current unit price
    /// * `quantity` - Available stock quantity
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Case-insensitive name match, the lookup rule movements use.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
