//! Shared type definitions.

mod cart;
mod id;
mod product;
mod sale;
mod status;

pub use cart::CartLine;
pub use id::{ProductId, SaleId};
pub use product::{FieldError, NewProduct, Product, ProductPatch};
pub use sale::{Customer, NewSale, Sale};
pub use status::SaleStatus;
