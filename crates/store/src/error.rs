//! Unified error handling.
//!
//! Each concern keeps its own error enum; `StoreError` is the aggregate
//! for binary consumers that want one `?`-able type.

use thiserror::Error;

use crate::actions::{AuthError, CheckoutError};
use crate::catalog::CatalogError;
use crate::checkout::{CheckoutFormError, SignupError};
use crate::config::ConfigError;

/// Application-level error type for the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reference data could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Order placement failed validation.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Login failed validation.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// The checkout form failed validation.
    #[error("checkout form error: {0}")]
    CheckoutForm(#[from] CheckoutFormError),

    /// The signup form failed validation.
    #[error("signup error: {0}")]
    Signup(#[from] SignupError),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
