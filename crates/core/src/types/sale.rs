//! Sale records and the customer info attached to them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CartLine, FieldError, SaleId, SaleStatus};

/// Customer info collected at checkout.
///
/// Email format is accepted as-is; only presence is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

impl Customer {
    /// # Errors
    ///
    /// Returns [`FieldError::Empty`] when name or email is blank.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.trim().is_empty() {
            return Err(FieldError::Empty("customer name"));
        }
        if self.email.trim().is_empty() {
            return Err(FieldError::Empty("customer email"));
        }
        Ok(())
    }
}

/// An immutable record of a purchase.
///
/// `items` and `total` never change once the sale is written; only `status`
/// may transition (pending -> completed). `total` is stored at checkout time
/// rather than recomputed from `items`.
///
/// `date` is serialized as epoch milliseconds: that is what the remote
/// database stores for its server timestamp, and the local backend follows
/// the same shape so both collections stay interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Assigned by the store at creation.
    pub id: SaleId,
    pub customer: Customer,
    /// Cart line snapshots at the time of purchase.
    pub items: Vec<CartLine>,
    pub total: Decimal,
    pub status: SaleStatus,
    /// Assigned by the store at write time: server timestamp on the remote
    /// backend, client clock on the local fallback.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
}

impl Sale {
    /// Month bucket of this sale (`YYYY-MM`), for admin reporting.
    #[must_use]
    pub fn month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// Fields for recording a sale. The store assigns id and date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSale {
    pub customer: Customer,
    pub items: Vec<CartLine>,
    pub total: Decimal,
    pub status: SaleStatus,
}
