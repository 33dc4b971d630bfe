//! Named, validated state transitions.
//!
//! Each action is a method on [`Store`] performing one atomic update:
//! either the whole transition commits and subscribers are notified once,
//! or the state is left untouched and the error propagates to the caller.

use chrono::Utc;
use thiserror::Error;

use monsoon_core::{
    CartLine, Order, OrderId, OrderItem, OrderStatus, ProductId, ShippingAddress, User,
};

use crate::catalog::{CatalogDocument, FilterUpdate};
use crate::orders::next_order_id;
use crate::state::Store;

/// Errors placing an order from the cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The cart has no lines.
    #[error("cart is empty")]
    EmptyCart,

    /// A cart line references a product no longer in the catalog.
    #[error("product {0} is no longer available")]
    MissingProduct(ProductId),
}

/// Errors logging in.
///
/// There is no password verification; these are presence checks only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The email field was empty.
    #[error("email is required")]
    MissingEmail,

    /// The password field was empty.
    #[error("password is required")]
    MissingPassword,
}

impl Store {
    /// Apply loaded reference data to the state.
    ///
    /// The document's absent fields have already defaulted to empty
    /// lists during parsing; loading an empty document yields an empty
    /// catalog, not an error.
    pub fn load_catalog(&mut self, document: CatalogDocument) {
        tracing::info!(
            categories = document.categories.len(),
            products = document.products.len(),
            "catalog loaded"
        );
        self.update(|state| {
            state.categories = document.categories;
            state.products = document.products;
        });
    }

    /// Overwrite one filter field.
    pub fn set_filter(&mut self, update: FilterUpdate) {
        self.update(|state| state.filters.apply(update));
    }

    /// Add one unit of a product to the cart.
    ///
    /// Increments the existing line or inserts a new line with quantity
    /// 1. Always succeeds; the product id is not checked against the
    /// catalog until checkout.
    pub fn add_to_cart(&mut self, product_id: ProductId) {
        tracing::debug!(product = %product_id, "add to cart");
        self.update(|state| {
            if let Some(line) = state
                .cart
                .iter_mut()
                .find(|line| line.product_id == product_id)
            {
                line.quantity += 1;
            } else {
                state.cart.push(CartLine::single(product_id));
            }
        });
    }

    /// Remove a product's line from the cart. No-op if absent.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        tracing::debug!(product = %product_id, "remove from cart");
        self.update(|state| state.cart.retain(|line| &line.product_id != product_id));
    }

    /// Set a line's quantity; `0` removes the line.
    ///
    /// No-op if the product id is not in the cart.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        tracing::debug!(product = %product_id, quantity, "update quantity");
        self.update(|state| {
            if quantity == 0 {
                state.cart.retain(|line| &line.product_id != product_id);
            } else if let Some(line) = state
                .cart
                .iter_mut()
                .find(|line| &line.product_id == product_id)
            {
                line.quantity = quantity;
            }
        });
    }

    /// Empty the cart unconditionally.
    pub fn clear_cart(&mut self) {
        self.update(|state| state.cart.clear());
    }

    /// Place an order from the current cart.
    ///
    /// Computes per-line totals and the order total, assigns a generated
    /// id and creation timestamp, sets the initial status, prepends the
    /// order to history, and empties the cart in one atomic transition.
    /// On error the state is unchanged and nothing is published.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no lines, or
    /// [`CheckoutError::MissingProduct`] if any line references a
    /// product absent from the catalog.
    pub fn place_order(&mut self, address: ShippingAddress) -> Result<OrderId, CheckoutError> {
        let created_at = Utc::now();

        let id = self.try_update(move |state| {
            if state.cart.is_empty() {
                return Err(CheckoutError::EmptyCart);
            }

            let mut items = Vec::with_capacity(state.cart.len());
            for line in &state.cart {
                let product = state
                    .products
                    .iter()
                    .find(|product| product.id == line.product_id)
                    .ok_or_else(|| CheckoutError::MissingProduct(line.product_id.clone()))?;

                items.push(OrderItem {
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    category: product.category.clone(),
                    quantity: line.quantity,
                    price: product.price,
                    total_amount: product.price.times(line.quantity),
                });
            }

            let total = items.iter().map(|item| item.total_amount).sum();
            let order = Order {
                id: next_order_id(created_at),
                created_at,
                status: OrderStatus::Processing,
                address,
                items,
                total,
            };
            let id = order.id.clone();

            state.orders.insert(0, order);
            state.cart.clear();
            Ok(id)
        })?;

        tracing::info!(order = %id, "order placed");
        Ok(id)
    }

    /// Log in with an email and password.
    ///
    /// Fabricates a user record from the email and sets it as the
    /// current user. Credentials are only checked for presence; there is
    /// no shape or password verification.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingEmail`] or
    /// [`AuthError::MissingPassword`] if either credential is empty.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        if password.is_empty() {
            return Err(AuthError::MissingPassword);
        }

        let user = User::from_email(email);
        tracing::info!(user = %user.id, "logged in");

        let current = user.clone();
        self.update(move |state| state.user = Some(current));
        Ok(user)
    }

    /// Clear the current user and empty the cart.
    pub fn logout(&mut self) {
        tracing::info!("logged out");
        self.update(|state| {
            state.user = None;
            state.cart.clear();
        });
    }
}
