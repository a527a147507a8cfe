//! Product records and admin mutation shapes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ProductId;

/// Field-level validation failure for product and customer data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required text field is empty or blank.
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// Price below zero.
    #[error("price must not be negative")]
    NegativePrice,
}

/// A catalog product as persisted by the store.
///
/// `stock` is unsigned: the stock invariant (`>= 0` at all times) is carried
/// by the type, and decrements use saturating arithmetic so a purchase can
/// never drive it below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque unique identifier, assigned by the store on creation.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Currency amount in the store's single implicit currency.
    pub price: Decimal,
    /// URI reference to the product image.
    pub image: String,
    /// Units currently in stock.
    pub stock: u32,
}

/// Fields for creating a product. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub stock: u32,
}

impl NewProduct {
    /// Check required fields before the record reaches the store.
    ///
    /// The store re-runs this on `create_product`, so a caller that skips
    /// validation still cannot persist an inconsistent record.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError`] for a blank name, description, or image, or a
    /// negative price.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.trim().is_empty() {
            return Err(FieldError::Empty("name"));
        }
        if self.description.trim().is_empty() {
            return Err(FieldError::Empty("description"));
        }
        if self.image.trim().is_empty() {
            return Err(FieldError::Empty("image"));
        }
        if self.price.is_sign_negative() {
            return Err(FieldError::NegativePrice);
        }
        Ok(())
    }

    /// Attach a store-assigned id, producing the persisted record.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            stock: self.stock,
        }
    }
}

/// Partial update for an existing product.
///
/// Absent fields are left untouched by the store. Serialization skips `None`
/// fields so the remote backend's merge semantics only see what changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

impl ProductPatch {
    /// A patch that only changes the stock level.
    #[must_use]
    pub fn stock(stock: u32) -> Self {
        Self {
            stock: Some(stock),
            ..Self::default()
        }
    }

    /// True when no field is set.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image.is_none()
            && self.stock.is_none()
    }

    /// Merge the set fields into an existing record.
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name.clone_from(name);
        }
        if let Some(description) = &self.description {
            product.description.clone_from(description);
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(image) = &self.image {
            product.image.clone_from(image);
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: Decimal::new(999, 2),
            image: "https://example.com/widget.png".to_string(),
            stock: 3,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn test_validate_blank_name() {
        let mut p = sample();
        p.name = "   ".to_string();
        assert_eq!(p.validate(), Err(FieldError::Empty("name")));
    }

    #[test]
    fn test_validate_negative_price() {
        let mut p = sample();
        p.price = Decimal::new(-1, 2);
        assert_eq!(p.validate(), Err(FieldError::NegativePrice));
    }

    #[test]
    fn test_patch_apply_merges_only_set_fields() {
        let mut product = sample().into_product(ProductId::new("p1"));
        let patch = ProductPatch {
            price: Some(Decimal::new(1299, 2)),
            stock: Some(7),
            ..ProductPatch::default()
        };
        patch.apply(&mut product);

        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, Decimal::new(1299, 2));
        assert_eq!(product.stock, 7);
    }

    #[test]
    fn test_patch_serialization_skips_unset_fields() {
        let json = serde_json::to_value(ProductPatch::stock(5)).expect("serialize");
        assert_eq!(json, serde_json::json!({ "stock": 5 }));
    }
}
