//! Minishop Store - persistence adapter.
//!
//! A uniform async CRUD interface over products and sales, backed by one of
//! two interchangeable implementations: a remote realtime document database
//! reached over REST, or a local file store used as fallback.
//!
//! The active backend is an explicit sum type ([`Store`]) chosen exactly
//! once by [`Store::connect`]: if a remote URL is configured and the startup
//! probe answers, every call goes remote; otherwise every call goes local.
//! The decision is never re-evaluated per call, and callers never branch on
//! which variant is active.
//!
//! Construct the store once and pass it down to the cart, checkout, and
//! catalog components rather than holding it in a process-wide global - that
//! is what makes them testable against a throwaway local store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
mod local;
mod remote;
pub mod seed;

pub use config::{ConfigError, StoreConfig};
pub use error::{Result, StoreError};
pub use local::LocalStore;
pub use remote::RemoteStore;

use minishop_core::{NewProduct, NewSale, Product, ProductId, ProductPatch, Sale};

/// The active persistence backend.
#[derive(Debug, Clone)]
pub enum Store {
    Remote(RemoteStore),
    Local(LocalStore),
}

impl Store {
    /// Select and open a backend for this process.
    ///
    /// Probes the remote database once when a URL is configured; probe
    /// failure is the ONLY trigger for the local fallback and is logged as a
    /// warning, not surfaced as an error.
    ///
    /// # Errors
    ///
    /// Returns an error only when the local store itself cannot be opened.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        if let Some(url) = &config.database_url {
            let remote = RemoteStore::new(url, config.http_timeout)?;
            match remote.probe().await {
                Ok(()) => {
                    tracing::info!(%url, "connected to remote database");
                    return Ok(Self::Remote(remote));
                }
                Err(e) => {
                    tracing::warn!(%url, error = %e, "remote database unreachable, using local store");
                }
            }
        }

        let local = LocalStore::open(&config.data_dir)?;
        tracing::info!(dir = %config.data_dir.display(), "using local store");
        Ok(Self::Local(local))
    }

    /// Human-readable name of the active backend.
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Remote(_) => "remote",
            Self::Local(_) => "local",
        }
    }

    /// Write the sample catalog if the products collection is empty.
    ///
    /// Idempotent: a second invocation sees the seeded products and writes
    /// nothing. Returns how many products were written.
    ///
    /// # Errors
    ///
    /// Propagates any backend failure.
    pub async fn seed_if_empty(&self) -> Result<usize> {
        if !self.list_products().await?.is_empty() {
            return Ok(0);
        }

        let samples = seed::sample_products();
        let count = samples.len();
        for fields in samples {
            self.create_product(fields).await?;
        }
        tracing::info!(count, "seeded sample catalog");
        Ok(count)
    }

    /// List all products. No ordering guarantee.
    ///
    /// # Errors
    ///
    /// Propagates any backend failure.
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        match self {
            Self::Remote(s) => s.list_products().await,
            Self::Local(s) => s.list_products(),
        }
    }

    /// Fetch one product by id.
    ///
    /// # Errors
    ///
    /// Propagates any backend failure; an absent id is `Ok(None)`.
    pub async fn get_product(&self, id: &ProductId) -> Result<Option<Product>> {
        match self {
            Self::Remote(s) => s.get_product(id).await,
            Self::Local(s) => s.get_product(id),
        }
    }

    /// Create a product, assigning its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for missing/invalid fields; the
    /// adapter re-checks even when the caller already validated.
    pub async fn create_product(&self, fields: NewProduct) -> Result<Product> {
        match self {
            Self::Remote(s) => s.create_product(fields).await,
            Self::Local(s) => s.create_product(fields),
        }
    }

    /// Merge partial fields into an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an absent id on both backends.
    pub async fn update_product(&self, id: &ProductId, patch: &ProductPatch) -> Result<()> {
        match self {
            Self::Remote(s) => s.update_product(id, patch).await,
            Self::Local(s) => s.update_product(id, patch),
        }
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an absent id on both backends.
    pub async fn delete_product(&self, id: &ProductId) -> Result<()> {
        match self {
            Self::Remote(s) => s.delete_product(id).await,
            Self::Local(s) => s.delete_product(id),
        }
    }

    /// List all sales.
    ///
    /// # Errors
    ///
    /// Propagates any backend failure.
    pub async fn list_sales(&self) -> Result<Vec<Sale>> {
        match self {
            Self::Remote(s) => s.list_sales().await,
            Self::Local(s) => s.list_sales(),
        }
    }

    /// Record a sale, assigning its id and date.
    ///
    /// # Errors
    ///
    /// Propagates any backend failure.
    pub async fn create_sale(&self, fields: NewSale) -> Result<Sale> {
        match self {
            Self::Remote(s) => s.create_sale(fields).await,
            Self::Local(s) => s.create_sale(fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_connect_without_url_goes_local() {
        let dir = tempdir().expect("tempdir");
        let store = Store::connect(&StoreConfig::local(dir.path()))
            .await
            .expect("connect");
        assert_eq!(store.backend_name(), "local");
    }

    #[tokio::test]
    async fn test_connect_falls_back_when_probe_fails() {
        let dir = tempdir().expect("tempdir");
        let mut config = StoreConfig::local(dir.path());
        // Nothing listens here; the probe must fail fast and fall back.
        config.database_url = Some("http://127.0.0.1:1/".to_string());
        config.http_timeout = std::time::Duration::from_millis(200);

        let store = Store::connect(&config).await.expect("connect");
        assert_eq!(store.backend_name(), "local");
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let dir = tempdir().expect("tempdir");
        let store = Store::connect(&StoreConfig::local(dir.path()))
            .await
            .expect("connect");

        assert_eq!(store.seed_if_empty().await.expect("seed"), 6);
        assert_eq!(store.seed_if_empty().await.expect("seed again"), 0);
        assert_eq!(store.list_products().await.expect("list").len(), 6);
    }
}
