//! Local file-backed store.
//!
//! The fallback backend used when the remote database is unreachable at
//! startup (or not configured). Each collection is one JSON file under the
//! data directory, read and rewritten whole on every mutation. A missing
//! file reads as an empty collection, so first use needs no setup step.
//!
//! Ids are UUIDs and sale dates come from the client clock - the local
//! analog of the remote backend's push keys and server timestamps.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use minishop_core::{NewProduct, NewSale, Product, ProductId, ProductPatch, Sale, SaleId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::{Result, StoreError};

const PRODUCTS_FILE: &str = "products.json";
const SALES_FILE: &str = "sales.json";

/// File-backed store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open a local store, creating the data directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn list_products(&self) -> Result<Vec<Product>> {
        self.read_collection(PRODUCTS_FILE)
    }

    pub fn get_product(&self, id: &ProductId) -> Result<Option<Product>> {
        let products = self.list_products()?;
        Ok(products.into_iter().find(|p| &p.id == id))
    }

    pub fn create_product(&self, fields: NewProduct) -> Result<Product> {
        fields.validate()?;
        let mut products = self.list_products()?;
        let product = fields.into_product(ProductId::new(Uuid::new_v4().to_string()));
        products.push(product.clone());
        self.write_collection(PRODUCTS_FILE, &products)?;
        Ok(product)
    }

    pub fn update_product(&self, id: &ProductId, patch: &ProductPatch) -> Result<()> {
        let mut products = self.list_products()?;
        let Some(product) = products.iter_mut().find(|p| &p.id == id) else {
            return Err(StoreError::not_found("products", id.as_str()));
        };
        patch.apply(product);
        self.write_collection(PRODUCTS_FILE, &products)
    }

    pub fn delete_product(&self, id: &ProductId) -> Result<()> {
        let mut products = self.list_products()?;
        let before = products.len();
        products.retain(|p| &p.id != id);
        if products.len() == before {
            return Err(StoreError::not_found("products", id.as_str()));
        }
        self.write_collection(PRODUCTS_FILE, &products)
    }

    pub fn list_sales(&self) -> Result<Vec<Sale>> {
        self.read_collection(SALES_FILE)
    }

    pub fn create_sale(&self, fields: NewSale) -> Result<Sale> {
        let mut sales = self.list_sales()?;
        let sale = Sale {
            id: SaleId::new(Uuid::new_v4().to_string()),
            customer: fields.customer,
            items: fields.items,
            total: fields.total,
            status: fields.status,
            date: Utc::now(),
        };
        sales.push(sale.clone());
        self.write_collection(SALES_FILE, &sales)?;
        Ok(sale)
    }

    fn collection_path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn read_collection<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.collection_path(file);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_collection<T: Serialize>(&self, file: &str, records: &[T]) -> Result<()> {
        let raw = serde_json::to_string_pretty(records)?;
        write_atomic(&self.collection_path(file), &raw)
    }
}

/// Write via a temp file + rename so a crash mid-write cannot leave a
/// truncated collection behind.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tempfile::tempdir;

    fn widget() -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: Decimal::new(1050, 2),
            image: "https://example.com/w.png".to_string(),
            stock: 4,
        }
    }

    #[test]
    fn test_missing_files_read_as_empty() {
        let dir = tempdir().expect("tempdir");
        let store = LocalStore::open(dir.path()).expect("open");
        assert!(store.list_products().expect("list").is_empty());
        assert!(store.list_sales().expect("list").is_empty());
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let dir = tempdir().expect("tempdir");
        let store = LocalStore::open(dir.path()).expect("open");

        let a = store.create_product(widget()).expect("create");
        let b = store.create_product(widget()).expect("create");
        assert_ne!(a.id, b.id);
        assert_eq!(store.list_products().expect("list").len(), 2);
    }

    #[test]
    fn test_create_rejects_invalid_fields() {
        let dir = tempdir().expect("tempdir");
        let store = LocalStore::open(dir.path()).expect("open");

        let mut bad = widget();
        bad.name = String::new();
        let err = store.create_product(bad).expect_err("must fail");
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.list_products().expect("list").is_empty());
    }

    #[test]
    fn test_update_merges_and_persists() {
        let dir = tempdir().expect("tempdir");
        let store = LocalStore::open(dir.path()).expect("open");
        let product = store.create_product(widget()).expect("create");

        store
            .update_product(&product.id, &ProductPatch::stock(1))
            .expect("update");

        let reread = store
            .get_product(&product.id)
            .expect("get")
            .expect("present");
        assert_eq!(reread.stock, 1);
        assert_eq!(reread.name, "Widget");
    }

    #[test]
    fn test_update_absent_id_is_not_found() {
        let dir = tempdir().expect("tempdir");
        let store = LocalStore::open(dir.path()).expect("open");

        let err = store
            .update_product(&ProductId::new("nope"), &ProductPatch::stock(1))
            .expect_err("must fail");
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_delete_absent_id_is_not_found() {
        let dir = tempdir().expect("tempdir");
        let store = LocalStore::open(dir.path()).expect("open");

        let err = store
            .delete_product(&ProductId::new("nope"))
            .expect_err("must fail");
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_delete_removes_record() {
        let dir = tempdir().expect("tempdir");
        let store = LocalStore::open(dir.path()).expect("open");
        let product = store.create_product(widget()).expect("create");

        store.delete_product(&product.id).expect("delete");
        assert!(store.get_product(&product.id).expect("get").is_none());
    }

    #[test]
    fn test_sale_gets_id_and_date() {
        use minishop_core::{CartLine, Customer, SaleStatus};

        let dir = tempdir().expect("tempdir");
        let store = LocalStore::open(dir.path()).expect("open");
        let product = store.create_product(widget()).expect("create");

        let sale = store
            .create_sale(NewSale {
                customer: Customer {
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                },
                items: vec![CartLine::from_product(&product)],
                total: product.price,
                status: SaleStatus::Completed,
            })
            .expect("create sale");

        assert!(!sale.id.as_str().is_empty());
        let listed = store.list_sales().expect("list");
        assert_eq!(listed, vec![sale]);
    }
}
