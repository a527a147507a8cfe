//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Product, ProductId};

/// One line of a cart or of a recorded sale.
///
/// `name`, `price`, and `image` are snapshots copied from the product at
/// add-to-cart time - NOT live-linked. A later price change does not affect
/// lines already in a cart, and sale items keep the price that was charged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    /// Always at least 1; a line whose quantity would drop to zero is
    /// removed from the cart instead.
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot a product into a new line with quantity 1.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let line = CartLine {
            product_id: ProductId::new("p1"),
            name: "Widget".to_string(),
            price: Decimal::new(550, 2),
            image: String::new(),
            quantity: 3,
        };
        assert_eq!(line.line_total(), Decimal::new(1650, 2));
    }
}
