//! Remote realtime database backend.
//!
//! Speaks the realtime database REST protocol:
//!
//! - collections live at `{base}/{collection}.json` and read back as a
//!   `{key: record}` map (or `null` when empty)
//! - `POST` pushes a record and answers `{"name": "<push-key>"}`; the push
//!   key becomes the entity id and is not stored inside the record
//! - `PATCH` merges fields into a record path; `DELETE` removes it
//!
//! Sale dates are written as the server-timestamp sentinel
//! `{".sv": "timestamp"}` so the store clock, not the client clock, decides
//! the recorded time; the created record is read back to learn the value.
//!
//! A `PATCH` to an absent path would silently create the record, so update
//! and delete fetch the path first and report [`StoreError::NotFound`] -
//! matching the local backend's contract.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use minishop_core::{
    CartLine, Customer, NewProduct, NewSale, Product, ProductId, ProductPatch, Sale, SaleId,
    SaleStatus,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, StoreError};

const PRODUCTS: &str = "products";
const SALES: &str = "sales";

/// REST client for the remote realtime database.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: reqwest::Client,
    base: String,
}

/// Response to a `POST` push: the assigned key.
#[derive(Debug, Deserialize)]
struct PushResponse {
    name: String,
}

/// A sale as stored remotely: the push key carries the id, so the record
/// itself holds only the remaining fields.
#[derive(Debug, Deserialize)]
struct SaleRecord {
    customer: Customer,
    items: Vec<CartLine>,
    total: Decimal,
    status: SaleStatus,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    date: DateTime<Utc>,
}

impl SaleRecord {
    fn into_sale(self, id: SaleId) -> Sale {
        Sale {
            id,
            customer: self.customer,
            items: self.items,
            total: self.total,
            status: self.status,
            date: self.date,
        }
    }
}

impl RemoteStore {
    /// Build a client for the database at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error if the client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Check that the database answers at all.
    ///
    /// Run exactly once at startup; failure here selects the local fallback.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on any transport or status failure.
    pub async fn probe(&self) -> Result<()> {
        let url = format!("{}/.json?shallow=true", self.base);
        self.client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(())
    }

    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let records: BTreeMap<String, NewProduct> = self.get_collection(PRODUCTS).await?;
        Ok(records
            .into_iter()
            .map(|(key, fields)| fields.into_product(ProductId::new(key)))
            .collect())
    }

    pub async fn get_product(&self, id: &ProductId) -> Result<Option<Product>> {
        let record: Option<NewProduct> = self.get_record(PRODUCTS, id.as_str()).await?;
        Ok(record.map(|fields| fields.into_product(id.clone())))
    }

    pub async fn create_product(&self, fields: NewProduct) -> Result<Product> {
        fields.validate()?;
        let key = self.push(PRODUCTS, &fields).await?;
        Ok(fields.into_product(ProductId::new(key)))
    }

    pub async fn update_product(&self, id: &ProductId, patch: &ProductPatch) -> Result<()> {
        // PATCH on an absent path would create a partial record.
        if self
            .get_record::<NewProduct>(PRODUCTS, id.as_str())
            .await?
            .is_none()
        {
            return Err(StoreError::not_found(PRODUCTS, id.as_str()));
        }

        self.client
            .patch(self.record_url(PRODUCTS, id.as_str()))
            .json(patch)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn delete_product(&self, id: &ProductId) -> Result<()> {
        if self
            .get_record::<NewProduct>(PRODUCTS, id.as_str())
            .await?
            .is_none()
        {
            return Err(StoreError::not_found(PRODUCTS, id.as_str()));
        }

        self.client
            .delete(self.record_url(PRODUCTS, id.as_str()))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn list_sales(&self) -> Result<Vec<Sale>> {
        let records: BTreeMap<String, SaleRecord> = self.get_collection(SALES).await?;
        Ok(records
            .into_iter()
            .map(|(key, record)| record.into_sale(SaleId::new(key)))
            .collect())
    }

    pub async fn create_sale(&self, fields: NewSale) -> Result<Sale> {
        let key = self.push(SALES, &sale_body(&fields)?).await?;

        // Read the record back to learn the server-assigned date.
        let record: Option<SaleRecord> = self.get_record(SALES, &key).await?;
        record
            .map(|r| r.into_sale(SaleId::new(key)))
            .ok_or_else(|| {
                StoreError::Backend("created sale did not read back".to_string())
            })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{collection}.json", self.base)
    }

    fn record_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{collection}/{id}.json", self.base)
    }

    async fn get_collection<T: serde::de::DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<BTreeMap<String, T>> {
        let records: Option<BTreeMap<String, T>> = self
            .client
            .get(self.collection_url(collection))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(records.unwrap_or_default())
    }

    async fn get_record<T: serde::de::DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<T>> {
        let record: Option<T> = self
            .client
            .get(self.record_url(collection, id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(record)
    }

    async fn push<T: serde::Serialize>(&self, collection: &str, record: &T) -> Result<String> {
        let response: PushResponse = self
            .client
            .post(self.collection_url(collection))
            .json(record)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| StoreError::Backend(format!("push response: {e}")))?;
        Ok(response.name)
    }
}

/// Build the sale payload, replacing the date with the server-timestamp
/// sentinel so the store assigns it at write time.
fn sale_body(fields: &NewSale) -> Result<Value> {
    let mut body = serde_json::to_value(fields)?;
    let Some(map) = body.as_object_mut() else {
        return Err(StoreError::Backend("sale did not serialize to an object".to_string()));
    };
    map.insert("date".to_string(), serde_json::json!({ ".sv": "timestamp" }));
    Ok(body)
}
