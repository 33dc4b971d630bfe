//! Order entities: placed orders, their denormalized line items, and the
//! shipping address snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::{OrderId, ProductId};
use crate::types::money::Money;
use crate::types::status::OrderStatus;

/// Shipping address captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl ShippingAddress {
    /// Field name/value pairs, in form order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("full_name", &self.full_name),
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("postal_code", &self.postal_code),
            ("country", &self.country),
        ]
    }
}

/// A denormalized order line: product details copied at checkout time so
/// later catalog changes cannot alter order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// The product the line was created from.
    pub product_id: ProductId,
    /// Product name at checkout time.
    pub product_name: String,
    /// Category display name at checkout time.
    pub category: String,
    /// Units ordered.
    pub quantity: u32,
    /// Unit price at checkout time.
    pub price: Money,
    /// `price × quantity`.
    pub total_amount: Money,
}

/// A placed order.
///
/// Item list and total are a frozen snapshot of the cart at checkout.
/// Status is assigned at creation and never transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Generated identifier, unique enough via the creation timestamp.
    pub id: OrderId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Fulfilment status.
    pub status: OrderStatus,
    /// Shipping address snapshot.
    pub address: ShippingAddress,
    /// Denormalized line items.
    pub items: Vec<OrderItem>,
    /// Sum of line totals.
    pub total: Money,
}

impl Order {
    /// Short display form of the order id (last 8 characters).
    #[must_use]
    pub fn short_id(&self) -> &str {
        let id = self.id.as_str();
        let start = id.len().saturating_sub(8);
        id.get(start..).unwrap_or(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        let order = Order {
            id: OrderId::new("ord_m1abc2de"),
            created_at: Utc::now(),
            status: OrderStatus::Processing,
            address: ShippingAddress {
                full_name: "Asha Rao".to_owned(),
                street: "12 Lake Road".to_owned(),
                city: "Pune".to_owned(),
                state: "MH".to_owned(),
                postal_code: "411001".to_owned(),
                country: "India".to_owned(),
            },
            items: vec![],
            total: Money::ZERO,
        };

        assert_eq!(order.short_id(), "m1abc2de");
    }

    #[test]
    fn test_short_id_handles_short_ids() {
        let order = Order {
            id: OrderId::new("ord_1"),
            created_at: Utc::now(),
            status: OrderStatus::Processing,
            address: ShippingAddress {
                full_name: "A".to_owned(),
                street: "B".to_owned(),
                city: "C".to_owned(),
                state: "D".to_owned(),
                postal_code: "E".to_owned(),
                country: "F".to_owned(),
            },
            items: vec![],
            total: Money::ZERO,
        };

        assert_eq!(order.short_id(), "ord_1");
    }
}
