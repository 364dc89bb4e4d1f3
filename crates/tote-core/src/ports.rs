//! # Ports
//!
//! The three collaborators the cart store talks to, expressed as traits.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CartStore boundaries                             │
//! │                                                                         │
//! │   CatalogService ◄──── stock(id), product(id)       (tote-catalog)      │
//! │                                                                         │
//! │   PersistentStore ◄─── get(key), set(key, blob)     (tote-db, memory)   │
//! │                                                                         │
//! │   Notifier ◄────────── notify(Notice)               (tote-store)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog and storage calls are async; notifications are fire-and-forget.

use async_trait::async_trait;

use crate::error::{CatalogError, StorageError};
use crate::types::{Notice, ProductDetails, ProductId, StockSnapshot};

/// Request/response access to product and stock data.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetches the current stock level of a product.
    async fn stock(&self, id: ProductId) -> Result<StockSnapshot, CatalogError>;

    /// Fetches the full product record.
    async fn product(&self, id: ProductId) -> Result<ProductDetails, CatalogError>;
}

/// Key-value string storage that survives session restarts.
#[async_trait]
pub trait PersistentStore: Send + Sync {
    /// Returns the stored value, or `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One-way sink for shopper-facing messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct FixedCatalog;

    #[async_trait]
    impl CatalogService for FixedCatalog {
        async fn stock(&self, id: ProductId) -> Result<StockSnapshot, CatalogError> {
            Ok(StockSnapshot::new(id, 3))
        }

        async fn product(&self, id: ProductId) -> Result<ProductDetails, CatalogError> {
            Err(CatalogError::Status {
                status: 404,
                path: format!("/products/{id}"),
            })
        }
    }

    #[derive(Default)]
    struct MapStore(Mutex<HashMap<String, String>>);

    #[async_trait]
    impl PersistentStore for MapStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.0.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_ports_are_object_safe() {
        let catalog: Box<dyn CatalogService> = Box::new(FixedCatalog);
        let store: Box<dyn PersistentStore> = Box::new(MapStore::default());

        let stock = catalog.stock(ProductId::new(2)).await.unwrap();
        assert_eq!(stock.amount, 3);
        assert!(catalog.product(ProductId::new(2)).await.is_err());

        assert_eq!(store.get("cart").await.unwrap(), None);
        store.set("cart", "[]").await.unwrap();
        assert_eq!(store.get("cart").await.unwrap().as_deref(), Some("[]"));
    }
}
