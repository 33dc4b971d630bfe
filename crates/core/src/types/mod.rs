//! Core types for Monsoon.
//!
//! This module provides type-safe wrappers for common domain concepts and
//! the entity structs held in the store's state snapshot.

pub mod cart;
pub mod catalog;
pub mod id;
pub mod money;
pub mod order;
pub mod status;
pub mod user;

pub use cart::CartLine;
pub use catalog::{Category, Product};
pub use id::*;
pub use money::Money;
pub use order::{Order, OrderItem, ShippingAddress};
pub use status::OrderStatus;
pub use user::User;
