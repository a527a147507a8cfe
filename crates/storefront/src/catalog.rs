//! Catalog query views.
//!
//! Pure, read-only projections over the product list, fetched fresh from the
//! store on every call (no caching). Views do not compose: each call answers
//! exactly one search, one filter, or one sort, and the caller replaces its
//! displayed result set entirely.

use minishop_core::Product;
use minishop_store::{Result, Store};
use rust_decimal::Decimal;

/// Sort orders offered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceAscending,
    PriceDescending,
    /// Lexicographic by name.
    Name,
    StockDescending,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "price-asc" => Ok(Self::PriceAscending),
            "price-desc" => Ok(Self::PriceDescending),
            "name" => Ok(Self::Name),
            "stock-desc" => Ok(Self::StockDescending),
            _ => Err(format!(
                "invalid sort key: {s} (expected price-asc, price-desc, name, or stock-desc)"
            )),
        }
    }
}

/// Case-insensitive substring search over product name and description.
///
/// A needle matching nothing yields an empty set, not an error.
///
/// # Errors
///
/// Propagates store failures.
pub async fn search(store: &Store, needle: &str) -> Result<Vec<Product>> {
    let products = store.list_products().await?;
    Ok(filter_search(products, needle))
}

/// Products whose price lies within `[min, max]` (inclusive bounds).
///
/// # Errors
///
/// Propagates store failures.
pub async fn price_range(store: &Store, min: Decimal, max: Decimal) -> Result<Vec<Product>> {
    let products = store.list_products().await?;
    Ok(filter_price_range(products, min, max))
}

/// The full product list in the given order.
///
/// # Errors
///
/// Propagates store failures.
pub async fn sorted(store: &Store, key: SortKey) -> Result<Vec<Product>> {
    let mut products = store.list_products().await?;
    sort_products(&mut products, key);
    Ok(products)
}

fn filter_search(products: Vec<Product>, needle: &str) -> Vec<Product> {
    let needle = needle.to_lowercase();
    products
        .into_iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .collect()
}

fn filter_price_range(products: Vec<Product>, min: Decimal, max: Decimal) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.price >= min && p.price <= max)
        .collect()
}

fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::PriceAscending => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDescending => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::StockDescending => products.sort_by(|a, b| b.stock.cmp(&a.stock)),
    }
}
