//! Monsoon Core - Shared types library.
//!
//! This crate provides common types used across all Monsoon components:
//! - `store` - Observable state store, actions, and derived views
//! - `cli` - Command-line composition root
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no state container, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, and statuses,
//!   plus the catalog/cart/order entity structs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
