//! Minishop Core - Shared types library.
//!
//! This crate provides common types used across all minishop components:
//! - `store` - Persistence adapter over the remote or local backend
//! - `storefront` - Cart, checkout, and catalog projections
//! - `cli` - Command-line storefront and admin panel
//!
//! # Architecture
//!
//! The core crate contains only types and field validation - no I/O, no
//! HTTP clients, no filesystem access. This keeps it lightweight and allows
//! it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Entity ids, product/sale/cart records, and status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
