//! Cart derived views.
//!
//! Pure functions over a state snapshot. Cart lines are resolved against
//! the loaded catalog at view time; a line whose product has vanished is
//! dropped from display and contributes zero to the subtotal.

use monsoon_core::{Money, Product};

use crate::state::StoreState;

/// One displayable cart row: the resolved product plus quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineView<'a> {
    pub product: &'a Product,
    pub quantity: u32,
    /// `product.price × quantity`.
    pub line_total: Money,
}

/// The resolved cart: displayable rows and their subtotal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartView<'a> {
    pub lines: Vec<CartLineView<'a>>,
    pub subtotal: Money,
}

impl CartView<'_> {
    /// Whether there is nothing to display.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Resolve the cart against the catalog.
#[must_use]
pub fn cart_view(state: &StoreState) -> CartView<'_> {
    let lines: Vec<CartLineView<'_>> = state
        .cart
        .iter()
        .filter_map(|line| {
            let product = state
                .products
                .iter()
                .find(|product| product.id == line.product_id)?;
            Some(CartLineView {
                product,
                quantity: line.quantity,
                line_total: product.price.times(line.quantity),
            })
        })
        .collect();

    let subtotal = lines.iter().map(|line| line.line_total).sum();
    CartView { lines, subtotal }
}

/// Total unit count across all cart lines, for the header badge.
///
/// Counts raw lines without resolving products, matching the badge's
/// behavior of reflecting the cart as entered.
#[must_use]
pub fn item_count(state: &StoreState) -> u32 {
    state.cart.iter().map(|line| line.quantity).sum()
}
