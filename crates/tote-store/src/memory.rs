//! # In-Memory Adapters
//!
//! Process-local implementations of the catalog and storage ports. They back
//! offline sessions, demos and tests; a real session uses `tote-catalog` and
//! `tote-db` instead.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use tote_core::{
    CatalogError, CatalogService, PersistentStore, ProductDetails, ProductId, StockSnapshot,
    StorageError,
};

// =============================================================================
// Memory Storage
// =============================================================================

/// Key-value string store held in a `HashMap`.
///
/// Writes can be switched off with [`MemoryStorage::fail_writes`] to simulate
/// a full or read-only medium.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: Mutex<StorageState>,
}

#[derive(Debug, Default)]
struct StorageState {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `key` with `value`.
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut state) = self.inner.lock() {
            state.entries.insert(key.into(), value.into());
        }
        self
    }

    /// Makes every subsequent `set` fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        if let Ok(mut state) = self.inner.lock() {
            state.fail_writes = fail;
        }
    }

    /// Returns the raw value under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .ok()
            .and_then(|state| state.entries.get(key).cloned())
    }

    fn state(&self) -> Result<std::sync::MutexGuard<'_, StorageState>, StorageError> {
        self.inner
            .lock()
            .map_err(|_| StorageError::Backend("memory storage lock poisoned".to_string()))
    }
}

#[async_trait]
impl PersistentStore for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.state()?.entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut state = self.state()?;
        if state.fail_writes {
            return Err(StorageError::Backend("storage is read-only".to_string()));
        }
        state.entries.insert(key.to_string(), value.to_string());
        debug!(key = %key, bytes = value.len(), "Stored cart in memory");
        Ok(())
    }
}

// =============================================================================
// Memory Catalog
// =============================================================================

/// Catalog backed by a fixed product table.
///
/// Unknown ids answer like the HTTP catalog does for a missing record
/// (`CatalogError::Status` with 404).
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    inner: Mutex<CatalogState>,
}

#[derive(Debug, Default)]
struct CatalogState {
    stock: HashMap<ProductId, u32>,
    products: HashMap<ProductId, ProductDetails>,
    offline: bool,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product with `stock` units available.
    pub fn with_product(self, details: ProductDetails, stock: u32) -> Self {
        if let Ok(mut state) = self.inner.lock() {
            state.stock.insert(details.id, stock);
            state.products.insert(details.id, details);
        }
        self
    }

    /// Changes the stock level of `id`.
    pub fn set_stock(&self, id: ProductId, amount: u32) {
        if let Ok(mut state) = self.inner.lock() {
            state.stock.insert(id, amount);
        }
    }

    /// While offline every request fails at the transport level.
    pub fn set_offline(&self, offline: bool) {
        if let Ok(mut state) = self.inner.lock() {
            state.offline = offline;
        }
    }

    fn state(&self) -> Result<std::sync::MutexGuard<'_, CatalogState>, CatalogError> {
        let state = self
            .inner
            .lock()
            .map_err(|_| CatalogError::Request("memory catalog lock poisoned".to_string()))?;
        if state.offline {
            return Err(CatalogError::Request("catalog is offline".to_string()));
        }
        Ok(state)
    }
}

#[async_trait]
impl CatalogService for MemoryCatalog {
    async fn stock(&self, id: ProductId) -> Result<StockSnapshot, CatalogError> {
        let amount = self.state()?.stock.get(&id).copied();
        // Let other tasks run, as a real round-trip would.
        tokio::task::yield_now().await;

        amount
            .map(|amount| StockSnapshot::new(id, amount))
            .ok_or_else(|| not_found(format!("/stock/{id}")))
    }

    async fn product(&self, id: ProductId) -> Result<ProductDetails, CatalogError> {
        let details = self.state()?.products.get(&id).cloned();
        tokio::task::yield_now().await;

        details.ok_or_else(|| not_found(format!("/products/{id}")))
    }
}

fn not_found(path: String) -> CatalogError {
    CatalogError::Status { status: 404, path }
}

// =============================================================================
// Unit Tests
// =============================================================================
