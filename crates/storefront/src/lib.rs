//! Minishop Storefront - cart, checkout, and read-only projections.
//!
//! Everything here works against an injected [`minishop_store::Store`]; no
//! component holds its own persistent copy of products or sales across
//! operations. Rendering of the results is the caller's concern.
//!
//! # Modules
//!
//! - [`cart`] - The file-persisted cart aggregate for one client
//! - [`checkout`] - Converts a cart into an immutable sale and decrements stock
//! - [`catalog`] - Search/filter/sort projections over the product list
//! - [`stats`] - Admin dashboard figures and sales analytics

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod stats;

pub use cart::{Cart, CartError};
pub use catalog::SortKey;
pub use checkout::{CheckoutError, checkout};
