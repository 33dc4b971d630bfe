//! Cart line item.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A line in the shopping cart: one product reference plus a quantity.
///
/// The cart holds at most one line per product id; quantity is always
/// positive (a quantity update to zero removes the line instead).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The referenced product.
    pub product_id: ProductId,
    /// Number of units, at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line for a single unit of a product.
    #[must_use]
    pub const fn single(product_id: ProductId) -> Self {
        Self {
            product_id,
            quantity: 1,
        }
    }
}
