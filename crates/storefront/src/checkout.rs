//! The checkout transition.
//!
//! Converts a non-empty cart plus customer info into an immutable sale
//! record, then decrements stock for each purchased line.
//!
//! Stock decrement is NOT transactional with sale creation: each product is
//! fetched and updated independently after the sale is written, so a failed
//! update - or a concurrent checkout of the same product - can leave stock
//! inconsistent with recorded sales (a lost update). That matches the
//! single-client-at-a-time assumption this system is built on; strengthening
//! it would need a combined sale+stock operation in the store adapter.

use minishop_core::{Customer, NewSale, ProductPatch, Sale, SaleStatus};
use minishop_store::{Store, StoreError};
use thiserror::Error;

use crate::cart::{Cart, CartError};

/// Errors from the checkout transition.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout attempted with no lines; nothing was written.
    #[error("cart is empty")]
    EmptyCart,

    /// Customer name or email missing.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The store rejected an operation. When this comes from sale creation
    /// the cart is left intact for retry.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The cart file could not be rewritten after the sale was recorded.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Record the sale for the current cart contents and clear the cart.
///
/// On success the cart is empty and each purchased product's stock has been
/// decremented by the purchased quantity, floored at zero. A line whose
/// product has disappeared since it was added is skipped with a warning;
/// individual stock-update failures are logged and do not fail the checkout,
/// since the sale already exists.
///
/// # Errors
///
/// - [`CheckoutError::EmptyCart`] when the cart has no lines (no store
///   writes are performed)
/// - [`CheckoutError::Validation`] when customer name or email is blank
/// - [`CheckoutError::Store`] when recording the sale fails (cart kept)
pub async fn checkout(
    store: &Store,
    cart: &mut Cart,
    customer: Customer,
) -> Result<Sale, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    customer
        .validate()
        .map_err(|e| CheckoutError::Validation(e.to_string()))?;

    let items = cart.lines().to_vec();
    let total = cart.total();

    let sale = store
        .create_sale(NewSale {
            customer,
            items: items.clone(),
            total,
            status: SaleStatus::Completed,
        })
        .await?;

    tracing::info!(sale_id = %sale.id, %total, lines = items.len(), "sale recorded");
    cart.clear()?;

    for line in &items {
        match store.get_product(&line.product_id).await {
            Ok(Some(product)) => {
                let new_stock = product.stock.saturating_sub(line.quantity);
                if let Err(e) = store
                    .update_product(&line.product_id, &ProductPatch::stock(new_stock))
                    .await
                {
                    tracing::warn!(
                        product_id = %line.product_id,
                        error = %e,
                        "stock decrement failed; sale is already recorded"
                    );
                }
            }
            Ok(None) => {
                tracing::warn!(
                    product_id = %line.product_id,
                    "purchased product no longer exists, skipping stock decrement"
                );
            }
            Err(e) => {
                tracing::warn!(
                    product_id = %line.product_id,
                    error = %e,
                    "could not fetch product for stock decrement"
                );
            }
        }
    }

    Ok(sale)
}
