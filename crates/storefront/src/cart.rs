//! The cart aggregate.
//!
//! One client's collection of line items, persisted to a JSON file so a
//! process restart reconstructs the identical cart. Every mutating operation
//! re-serializes the full line collection synchronously before returning -
//! there is no dirty state to flush later.

use std::fs;
use std::path::{Path, PathBuf};

use minishop_core::{CartLine, Product, ProductId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Cart persistence failure.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("cart io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cart serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;

/// The mutable, persisted line collection for one client.
///
/// Invariants: at most one line per product id, and every line has
/// quantity >= 1 (an update that would reach zero removes the line).
#[derive(Debug)]
pub struct Cart {
    path: PathBuf,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Load the cart persisted at `path`.
    ///
    /// A missing file is an empty cart; first use needs no setup.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let lines = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, lines })
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantity over all lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of price x quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add one unit of `product`.
    ///
    /// An existing line for the same product increments its quantity;
    /// otherwise a new line snapshots the product's name, price, and image
    /// at this instant.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if persisting fails; the in-memory change is
    /// still applied.
    pub fn add_item(&mut self, product: &Product) -> Result<()> {
        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::from_product(product)),
        }
        self.persist()
    }

    /// Remove the line for `product_id`; no-op when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if persisting fails.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<()> {
        self.lines.retain(|l| &l.product_id != product_id);
        self.persist()
    }

    /// Set the quantity of an existing line directly.
    ///
    /// A quantity of zero or below behaves as [`Self::remove_item`]. The new
    /// quantity is deliberately not checked against current stock; the cart
    /// only snapshots, and stock is reconciled at checkout.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if persisting fails.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Result<()> {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            return self.persist();
        }
        Ok(())
    }

    /// Empty the line collection.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if persisting fails.
    pub fn clear(&mut self) -> Result<()> {
        self.lines.clear();
        self.persist()
    }

    /// Re-serialize the full line collection to the cart file.
    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.lines)?;
        write_atomic(&self.path, &raw)?;
        Ok(())
    }
}

fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn product(id: &str, price: Decimal, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: "desc".to_string(),
            price,
            image: "https://example.com/p.png".to_string(),
            stock,
        }
    }

    fn fresh_cart(dir: &tempfile::TempDir) -> Cart {
        Cart::load(dir.path().join("cart.json")).expect("load")
    }

    #[test]
    fn test_missing_file_is_empty_cart() {
        let dir = tempdir().expect("tempdir");
        let cart = fresh_cart(&dir);
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_adding_same_product_twice_merges_lines() {
        let dir = tempdir().expect("tempdir");
        let mut cart = fresh_cart(&dir);
        let p = product("p1", Decimal::new(1000, 2), 5);

        cart.add_item(&p).expect("add");
        cart.add_item(&p).expect("add");

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_count_and_total_track_all_mutations() {
        let dir = tempdir().expect("tempdir");
        let mut cart = fresh_cart(&dir);
        let a = product("a", Decimal::new(1000, 2), 5);
        let b = product("b", Decimal::new(550, 2), 5);

        cart.add_item(&a).expect("add");
        cart.add_item(&a).expect("add");
        cart.add_item(&b).expect("add");
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), Decimal::new(2550, 2));

        cart.update_quantity(&a.id, 5).expect("update");
        assert_eq!(cart.count(), 6);
        assert_eq!(cart.total(), Decimal::new(5550, 2));

        cart.remove_item(&b.id).expect("remove");
        assert_eq!(cart.count(), 5);
        assert_eq!(cart.total(), Decimal::new(5000, 2));
    }

    #[test]
    fn test_zero_quantity_removes_line() {
        let dir = tempdir().expect("tempdir");
        let mut cart = fresh_cart(&dir);
        let p = product("p1", Decimal::new(1000, 2), 5);

        cart.add_item(&p).expect("add");
        cart.update_quantity(&p.id, 0).expect("update");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_negative_quantity_removes_line() {
        let dir = tempdir().expect("tempdir");
        let mut cart = fresh_cart(&dir);
        let p = product("p1", Decimal::new(1000, 2), 5);

        cart.add_item(&p).expect("add");
        cart.update_quantity(&p.id, -5).expect("update");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_product_is_noop() {
        let dir = tempdir().expect("tempdir");
        let mut cart = fresh_cart(&dir);
        cart.update_quantity(&ProductId::new("ghost"), 3)
            .expect("update");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_unknown_product_is_noop() {
        let dir = tempdir().expect("tempdir");
        let mut cart = fresh_cart(&dir);
        let p = product("p1", Decimal::new(1000, 2), 5);
        cart.add_item(&p).expect("add");

        cart.remove_item(&ProductId::new("ghost")).expect("remove");
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_snapshot_does_not_track_later_price_changes() {
        let dir = tempdir().expect("tempdir");
        let mut cart = fresh_cart(&dir);
        let mut p = product("p1", Decimal::new(1000, 2), 5);

        cart.add_item(&p).expect("add");
        p.price = Decimal::new(9999, 2);

        assert_eq!(cart.total(), Decimal::new(1000, 2));
    }

    #[test]
    fn test_reload_reconstructs_identical_state() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("cart.json");
        let a = product("a", Decimal::new(1000, 2), 5);
        let b = product("b", Decimal::new(550, 2), 5);

        let mut cart = Cart::load(&path).expect("load");
        cart.add_item(&a).expect("add");
        cart.add_item(&a).expect("add");
        cart.add_item(&b).expect("add");

        let reloaded = Cart::load(&path).expect("reload");
        assert_eq!(reloaded.lines(), cart.lines());
        assert_eq!(reloaded.count(), 3);
        assert_eq!(reloaded.total(), Decimal::new(2550, 2));
    }

    #[test]
    fn test_clear_persists_empty_collection() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("cart.json");
        let p = product("p1", Decimal::new(1000, 2), 5);

        let mut cart = Cart::load(&path).expect("load");
        cart.add_item(&p).expect("add");
        cart.clear().expect("clear");

        let reloaded = Cart::load(&path).expect("reload");
        assert!(reloaded.is_empty());
    }
}
