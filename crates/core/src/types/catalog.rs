//! Catalog entities: categories and products.
//!
//! Both are immutable once loaded from the reference data document.

use serde::{Deserialize, Serialize};

use crate::types::id::{CategorySlug, ProductId};
use crate::types::money::Money;

/// A browsable product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// URL-safe identifier (e.g., `"electronics"`).
    pub slug: CategorySlug,
    /// Display name (e.g., `"Electronics"`).
    pub name: String,
    /// Short description shown on the category card.
    pub description: String,
    /// Image reference.
    pub image: String,
}

/// A product in the catalog.
///
/// The `category` field holds the category's display name, not its slug.
/// It is a loose reference, not a strict foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Category display name.
    pub category: String,
    /// Unit price in minor currency units.
    pub price: Money,
    /// Average rating, 0–5.
    pub rating: f64,
    /// Image reference.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
