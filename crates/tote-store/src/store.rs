//! # Cart Store
//!
//! Holds the live cart and applies shopper actions to it.
//!
//! ## Operation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operation                                 │
//! │                                                                         │
//! │  catalog lookups ──► take turn ──► reducer ──► persist ──► commit      │
//! │         │                │            │           │           │         │
//! │         └── Err ─────────┼────────────┴───────────┘           │         │
//! │                 │        │                                    │         │
//! │                 ▼        │                                    ▼         │
//! │   notify error,          │                           notify success    │
//! │   cart untouched         │                           (remove only)     │
//! │                          └──────────── end turn ◄─────────────┘         │
//! │                                                                         │
//! │  NOTE: Catalog calls run before the turn is taken, so a slow catalog   │
//! │        only holds up the operation waiting on it. The reducer always   │
//! │        runs over the cart the previous turn committed: two quick       │
//! │        clicks on "add" still add two units.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The committed cart sits behind its own lock, taken only for a clone or a
//! swap, so `cart()` and `summary()` never wait on a mutation.
//!
//! The persisted blob is written before the in-memory cart changes, so the
//! two never disagree after an operation returns.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, instrument, warn};

use tote_core::validation::{ensure_stock, validate_amount};
use tote_core::{
    plan_add, AddPlan, Cart, CartError, CartResult, CartSummary, CatalogService, LineItem,
    Notice, Notifier, PersistentStore, ProductDetails, ProductId, StorageError,
    UpdateProductAmount, DEFAULT_STORAGE_KEY, INITIAL_AMOUNT,
};

// =============================================================================
// Notice Messages
// =============================================================================

/// Shown when the catalog cannot cover the requested quantity.
pub const MSG_STOCK_UNAVAILABLE: &str = "Requested quantity unavailable";
/// Shown when adding or changing a quantity fails unexpectedly.
pub const MSG_ADD_FAILED: &str = "Failed to add product";
pub const MSG_REMOVED: &str = "Product removed from cart";
pub const MSG_REMOVE_FAILED: &str = "Failed to remove product from cart";
pub const MSG_CLEAR_FAILED: &str = "Failed to clear cart";
pub const MSG_INVALID_AMOUNT: &str = "Invalid product quantity";

// =============================================================================
// Cart Store
// =============================================================================

/// The shopper's cart for one session.
///
/// ## Usage
/// ```rust,ignore
/// let store = CartStore::load(catalog, storage, notifier, DEFAULT_STORAGE_KEY).await;
///
/// store.add_product(ProductId::new(1)).await?;
/// store.update_product_amount(UpdateProductAmount::new(ProductId::new(1), 3)).await?;
/// store.remove_product(ProductId::new(1)).await?;
/// ```
///
/// Every operation reports its outcome to the notifier itself. The returned
/// `CartResult` is for callers that want to branch on the cause; ignoring it
/// is fine.
pub struct CartStore {
    catalog: Arc<dyn CatalogService>,
    storage: Arc<dyn PersistentStore>,
    notifier: Arc<dyn Notifier>,
    key: String,
    /// One mutation at a time through reducer, persist and commit.
    turn: Mutex<()>,
    committed: RwLock<Cart>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Restores the cart persisted under `key`.
    ///
    /// A missing, unreadable or corrupt entry yields an empty cart; the
    /// session still starts.
    pub async fn load(
        catalog: Arc<dyn CatalogService>,
        storage: Arc<dyn PersistentStore>,
        notifier: Arc<dyn Notifier>,
        key: impl Into<String>,
    ) -> Self {
        let key = key.into();

        let cart = match storage.get(&key).await {
            Ok(Some(blob)) => match Cart::from_json(&blob) {
                Ok(cart) => {
                    info!(key = %key, items = cart.len(), "Restored persisted cart");
                    cart
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Persisted cart is corrupt, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => {
                debug!(key = %key, "No persisted cart, starting empty");
                Cart::new()
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Could not read persisted cart, starting empty");
                Cart::new()
            }
        };

        CartStore {
            catalog,
            storage,
            notifier,
            key,
            turn: Mutex::new(()),
            committed: RwLock::new(cart),
        }
    }

    /// Same as [`CartStore::load`] with the default storage key.
    pub async fn load_default(
        catalog: Arc<dyn CatalogService>,
        storage: Arc<dyn PersistentStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::load(catalog, storage, notifier, DEFAULT_STORAGE_KEY).await
    }

    /// Storage key the cart is persisted under.
    pub fn key(&self) -> &str {
        &self.key
    }

    // -------------------------------------------------------------------------
    // Read Access
    // -------------------------------------------------------------------------

    /// Snapshot of the current cart.
    pub async fn cart(&self) -> Cart {
        self.committed.read().await.clone()
    }

    /// Totals for the current cart.
    pub async fn summary(&self) -> CartSummary {
        self.committed.read().await.summary()
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Already in the cart: amount goes up by one, if stock allows
    /// - Not in the cart: product details are fetched and a line item with
    ///   amount 1 is appended, if at least one unit is in stock
    #[instrument(skip(self, product_id), fields(product_id = %product_id))]
    pub async fn add_product(&self, product_id: ProductId) -> CartResult<Cart> {
        let outcome = self.apply_add(product_id).await;
        self.report("add_product", &outcome, None, MSG_ADD_FAILED);
        outcome
    }

    /// Removes a product's line item.
    ///
    /// Removing an id that is not in the cart still rewrites storage and
    /// still reports success.
    #[instrument(skip(self, product_id), fields(product_id = %product_id))]
    pub async fn remove_product(&self, product_id: ProductId) -> CartResult<Cart> {
        let outcome = {
            let _turn = self.turn.lock().await;
            let next = self.cart().await.without(product_id);
            self.commit(next).await
        };
        self.report("remove_product", &outcome, Some(MSG_REMOVED), MSG_REMOVE_FAILED);
        outcome
    }

    /// Sets a product's amount to an explicit value.
    ///
    /// ## Behavior
    /// - Zero is rejected before the catalog is contacted
    /// - The amount must be covered by current stock
    /// - An id that is not in the cart leaves the items as they are, but the
    ///   cart is still persisted
    #[instrument(
        skip(self, request),
        fields(product_id = %request.product_id, amount = request.amount)
    )]
    pub async fn update_product_amount(&self, request: UpdateProductAmount) -> CartResult<Cart> {
        let outcome = self.apply_update(request).await;
        self.report("update_product_amount", &outcome, None, MSG_ADD_FAILED);
        outcome
    }

    /// Empties the cart.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> CartResult<Cart> {
        let outcome = {
            let _turn = self.turn.lock().await;
            self.commit(Cart::new()).await
        };
        self.report("clear", &outcome, None, MSG_CLEAR_FAILED);
        outcome
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    async fn apply_add(&self, product_id: ProductId) -> CartResult<Cart> {
        let stock = self.catalog.stock(product_id).await?;
        let mut details = None;

        loop {
            // Fetch details up front when the item looks new, so the turn is
            // never held across a catalog call.
            if details.is_none()
                && matches!(plan_add(&self.cart().await, &stock), Ok(AddPlan::Insert))
            {
                details = Some(self.requested_details(product_id).await?);
            }

            let _turn = self.turn.lock().await;
            let cart = self.cart().await;

            let next = match plan_add(&cart, &stock)? {
                AddPlan::Increment { amount } => cart.with_amount(product_id, amount),
                AddPlan::Insert => match details.take() {
                    Some(details) => {
                        cart.with_item(LineItem::from_details(details, INITIAL_AMOUNT))
                    }
                    // Removed by another operation since the lookup.
                    None => continue,
                },
            };

            return self.commit(next).await;
        }
    }

    /// Product details keyed by the id that was asked for.
    async fn requested_details(&self, product_id: ProductId) -> CartResult<ProductDetails> {
        let details = self.catalog.product(product_id).await?;
        if details.id != product_id {
            warn!(returned = %details.id, "Catalog returned a different product id");
        }
        Ok(ProductDetails {
            id: product_id,
            ..details
        })
    }

    async fn apply_update(&self, request: UpdateProductAmount) -> CartResult<Cart> {
        validate_amount(request.amount)?;

        let stock = self.catalog.stock(request.product_id).await?;
        ensure_stock(&stock, request.amount)?;

        let _turn = self.turn.lock().await;
        let next = self
            .cart()
            .await
            .with_amount(request.product_id, request.amount);
        self.commit(next).await
    }

    /// Persists `next`, then makes it the live cart. Callers hold the turn.
    async fn commit(&self, next: Cart) -> CartResult<Cart> {
        let blob = next.to_json().map_err(StorageError::from)?;
        self.storage.set(&self.key, &blob).await?;

        *self.committed.write().await = next.clone();
        Ok(next)
    }

    fn report(
        &self,
        operation: &'static str,
        outcome: &CartResult<Cart>,
        success: Option<&str>,
        failure: &str,
    ) {
        match outcome {
            Ok(cart) => {
                debug!(operation, items = cart.len(), "Cart updated");
                if let Some(message) = success {
                    self.notifier.notify(Notice::success(message));
                }
            }
            Err(CartError::StockInsufficient {
                available,
                requested,
                ..
            }) => {
                info!(operation, available, requested, "Rejected: not enough stock");
                self.notifier.notify(Notice::error(MSG_STOCK_UNAVAILABLE));
            }
            Err(CartError::Validation(e)) => {
                info!(operation, error = %e, "Rejected: invalid input");
                self.notifier.notify(Notice::error(MSG_INVALID_AMOUNT));
            }
            Err(e) => {
                error!(operation, error = %e, "Cart operation failed");
                self.notifier.notify(Notice::error(failure));
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryCatalog, MemoryStorage};
    use crate::notifier::ChannelNotifier;
    use tokio::sync::mpsc::UnboundedReceiver;

    const KEY: &str = "@RocketShoes:cart";

    struct Harness {
        store: CartStore,
        catalog: Arc<MemoryCatalog>,
        storage: Arc<MemoryStorage>,
        notices: UnboundedReceiver<Notice>,
    }

    impl Harness {
        /// Drains every notice emitted so far.
        fn notices(&mut self) -> Vec<Notice> {
            let mut out = Vec::new();
            while let Ok(notice) = self.notices.try_recv() {
                out.push(notice);
            }
            out
        }

        fn persisted(&self) -> Option<Cart> {
            self.storage
                .raw(KEY)
                .map(|blob| Cart::from_json(&blob).unwrap())
        }
    }

    fn product(id: u64) -> ProductDetails {
        ProductDetails::new(ProductId::new(id))
            .with_attribute("title", format!("Tênis {id}"))
            .with_attribute("price", 139.9)
            .with_attribute("image", format!("https://cdn.example/{id}.jpg"))
    }

    fn item(id: u64, amount: u32) -> LineItem {
        LineItem::from_details(product(id), amount)
    }

    async fn harness(stock: &[(u64, u32)], initial: &[LineItem]) -> Harness {
        let catalog = stock
            .iter()
            .fold(MemoryCatalog::new(), |catalog, &(id, amount)| {
                catalog.with_product(product(id), amount)
            });
        let catalog = Arc::new(catalog);

        let storage = MemoryStorage::new();
        let storage = if initial.is_empty() {
            storage
        } else {
            let cart = Cart::from_items(initial.iter().cloned());
            storage.with_entry(KEY, cart.to_json().unwrap())
        };
        let storage = Arc::new(storage);

        let (notifier, notices) = ChannelNotifier::new();
        let store = CartStore::load(
            catalog.clone(),
            storage.clone(),
            Arc::new(notifier),
            KEY,
        )
        .await;

        Harness {
            store,
            catalog,
            storage,
            notices,
        }
    }

    // -------------------------------------------------------------------------
    // Load
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_load_restores_persisted_cart() {
        let h = harness(&[], &[item(1, 2), item(3, 1)]).await;

        let cart = h.store.cart().await;
        assert_eq!(cart.items(), &[item(1, 2), item(3, 1)]);
    }

    #[tokio::test]
    async fn test_load_corrupt_blob_starts_empty() {
        let (notifier, _rx) = ChannelNotifier::new();
        let storage = Arc::new(MemoryStorage::new().with_entry(KEY, "{not a cart"));

        let store = CartStore::load(
            Arc::new(MemoryCatalog::new()),
            storage.clone(),
            Arc::new(notifier),
            KEY,
        )
        .await;

        assert!(store.cart().await.is_empty());
        // Nothing is rewritten until the first mutation.
        assert_eq!(storage.raw(KEY).as_deref(), Some("{not a cart"));
    }

    // -------------------------------------------------------------------------
    // add_product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_add_new_product() {
        let mut h = harness(&[(1, 5)], &[]).await;

        let cart = h.store.add_product(ProductId::new(1)).await.unwrap();

        assert_eq!(cart.len(), 1);
        let line = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(line.amount, 1);
        assert_eq!(line.title(), Some("Tênis 1"));
        assert_eq!(h.persisted(), Some(cart));
        assert!(h.notices().is_empty());
    }

    #[tokio::test]
    async fn test_add_existing_product_increments_only_that_item() {
        let mut h = harness(&[(1, 5), (2, 5)], &[item(1, 2), item(2, 1)]).await;

        let cart = h.store.add_product(ProductId::new(1)).await.unwrap();

        assert_eq!(cart.items(), &[item(1, 3), item(2, 1)]);
        assert_eq!(h.persisted(), Some(cart));
        assert!(h.notices().is_empty());
    }

    #[tokio::test]
    async fn test_add_beyond_stock_is_rejected() {
        let mut h = harness(&[(1, 1)], &[item(1, 1)]).await;

        let err = h.store.add_product(ProductId::new(1)).await.unwrap_err();

        assert!(matches!(
            err,
            CartError::StockInsufficient {
                available: 1,
                requested: 2,
                ..
            }
        ));
        assert_eq!(h.store.cart().await.items(), &[item(1, 1)]);
        assert_eq!(h.notices(), vec![Notice::error(MSG_STOCK_UNAVAILABLE)]);
    }

    #[tokio::test]
    async fn test_add_out_of_stock_product_writes_nothing() {
        let mut h = harness(&[(1, 0)], &[]).await;

        for _ in 0..3 {
            assert!(h.store.add_product(ProductId::new(1)).await.is_err());
        }

        assert!(h.store.cart().await.is_empty());
        assert_eq!(h.persisted(), None);
        assert_eq!(h.notices().len(), 3);
    }

    #[tokio::test]
    async fn test_add_unknown_product_reports_failure() {
        let mut h = harness(&[], &[]).await;

        let err = h.store.add_product(ProductId::new(42)).await.unwrap_err();

        assert!(matches!(err, CartError::CatalogUnavailable(_)));
        assert!(h.store.cart().await.is_empty());
        assert_eq!(h.notices(), vec![Notice::error(MSG_ADD_FAILED)]);
    }

    #[tokio::test]
    async fn test_add_with_failing_storage_keeps_state() {
        let mut h = harness(&[(1, 5)], &[item(1, 1)]).await;
        h.storage.fail_writes(true);

        let err = h.store.add_product(ProductId::new(1)).await.unwrap_err();

        assert!(matches!(err, CartError::StorageFailure(_)));
        assert_eq!(h.store.cart().await.items(), &[item(1, 1)]);
        assert_eq!(h.persisted().unwrap().items(), &[item(1, 1)]);
        assert_eq!(h.notices(), vec![Notice::error(MSG_ADD_FAILED)]);
    }

    /// Catalog whose product records all carry the wrong id.
    struct MislabeledCatalog;

    #[async_trait::async_trait]
    impl CatalogService for MislabeledCatalog {
        async fn stock(
            &self,
            id: ProductId,
        ) -> Result<tote_core::StockSnapshot, tote_core::CatalogError> {
            Ok(tote_core::StockSnapshot::new(id, 5))
        }

        async fn product(&self, _id: ProductId) -> Result<ProductDetails, tote_core::CatalogError> {
            Ok(product(99))
        }
    }

    #[tokio::test]
    async fn test_add_keys_item_by_requested_id() {
        let (notifier, _rx) = ChannelNotifier::new();
        let store = CartStore::load(
            Arc::new(MislabeledCatalog),
            Arc::new(MemoryStorage::new()),
            Arc::new(notifier),
            KEY,
        )
        .await;

        let cart = store.add_product(ProductId::new(1)).await.unwrap();

        let line = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(line.amount, 1);
        assert_eq!(line.title(), Some("Tênis 99"));
        assert!(!cart.contains(ProductId::new(99)));
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_not_lost() {
        let h = harness(&[(1, 10)], &[]).await;
        let store = Arc::new(h.store);

        let (a, b, c) = tokio::join!(
            store.add_product(ProductId::new(1)),
            store.add_product(ProductId::new(1)),
            store.add_product(ProductId::new(1)),
        );
        assert!(a.is_ok() && b.is_ok() && c.is_ok());

        let cart = store.cart().await;
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().amount, 3);

        let persisted = Cart::from_json(&h.storage.raw(KEY).unwrap()).unwrap();
        assert_eq!(persisted, cart);
    }

    /// Catalog whose requests never complete.
    struct StalledCatalog;

    #[async_trait::async_trait]
    impl CatalogService for StalledCatalog {
        async fn stock(
            &self,
            _id: ProductId,
        ) -> Result<tote_core::StockSnapshot, tote_core::CatalogError> {
            std::future::pending().await
        }

        async fn product(&self, _id: ProductId) -> Result<ProductDetails, tote_core::CatalogError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_stalled_catalog_only_holds_up_its_own_operation() {
        let storage = Arc::new(MemoryStorage::new().with_entry(
            KEY,
            Cart::from_items([item(2, 1), item(3, 1)]).to_json().unwrap(),
        ));
        let (notifier, _rx) = ChannelNotifier::new();
        let store = Arc::new(
            CartStore::load(Arc::new(StalledCatalog), storage.clone(), Arc::new(notifier), KEY)
                .await,
        );

        let stalled = tokio::spawn({
            let store = store.clone();
            async move { store.add_product(ProductId::new(1)).await }
        });
        tokio::task::yield_now().await;

        let wait = std::time::Duration::from_secs(1);

        let cart = tokio::time::timeout(wait, store.cart()).await.unwrap();
        assert_eq!(cart.len(), 2);

        let summary = tokio::time::timeout(wait, store.summary()).await.unwrap();
        assert_eq!(summary.total_quantity, 2);

        let cart = tokio::time::timeout(wait, store.remove_product(ProductId::new(2)))
            .await
            .unwrap()
            .unwrap();
        assert!(!cart.contains(ProductId::new(2)));

        tokio::time::timeout(wait, store.clear())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(storage.raw(KEY).as_deref(), Some("[]"));

        assert!(!stalled.is_finished());
        stalled.abort();
    }

    // -------------------------------------------------------------------------
    // remove_product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_remove_product() {
        let mut h = harness(&[], &[item(1, 1), item(2, 1)]).await;

        let cart = h.store.remove_product(ProductId::new(2)).await.unwrap();

        assert_eq!(cart.items(), &[item(1, 1)]);
        assert_eq!(h.persisted(), Some(cart));
        assert_eq!(h.notices(), vec![Notice::success(MSG_REMOVED)]);
    }

    #[tokio::test]
    async fn test_remove_absent_product_still_persists_and_succeeds() {
        let mut h = harness(&[], &[item(1, 1)]).await;
        h.storage.set(KEY, "[]").await.unwrap();

        let cart = h.store.remove_product(ProductId::new(7)).await.unwrap();

        assert_eq!(cart.items(), &[item(1, 1)]);
        assert_eq!(h.persisted(), Some(cart));
        assert_eq!(h.notices(), vec![Notice::success(MSG_REMOVED)]);
    }

    #[tokio::test]
    async fn test_remove_with_failing_storage() {
        let mut h = harness(&[], &[item(1, 1)]).await;
        h.storage.fail_writes(true);

        assert!(h.store.remove_product(ProductId::new(1)).await.is_err());

        assert_eq!(h.store.cart().await.items(), &[item(1, 1)]);
        assert_eq!(h.notices(), vec![Notice::error(MSG_REMOVE_FAILED)]);
    }

    // -------------------------------------------------------------------------
    // update_product_amount
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_update_amount_within_stock() {
        let mut h = harness(&[(1, 10)], &[item(1, 2)]).await;

        let cart = h
            .store
            .update_product_amount(UpdateProductAmount::new(ProductId::new(1), 5))
            .await
            .unwrap();

        assert_eq!(cart.items(), &[item(1, 5)]);
        assert_eq!(h.persisted(), Some(cart));
        assert!(h.notices().is_empty());
    }

    #[tokio::test]
    async fn test_update_amount_equal_to_stock_is_allowed() {
        let h = harness(&[(1, 4)], &[item(1, 1)]).await;

        let cart = h
            .store
            .update_product_amount(UpdateProductAmount::new(ProductId::new(1), 4))
            .await
            .unwrap();

        assert_eq!(cart.get(ProductId::new(1)).unwrap().amount, 4);
    }

    #[tokio::test]
    async fn test_update_amount_beyond_stock_is_rejected() {
        let mut h = harness(&[(1, 3)], &[item(1, 2)]).await;

        let err = h
            .store
            .update_product_amount(UpdateProductAmount::new(ProductId::new(1), 4))
            .await
            .unwrap_err();

        assert!(err.is_rejection());
        assert_eq!(h.store.cart().await.items(), &[item(1, 2)]);
        assert_eq!(h.notices(), vec![Notice::error(MSG_STOCK_UNAVAILABLE)]);
    }

    #[tokio::test]
    async fn test_update_zero_amount_is_rejected_without_catalog() {
        let mut h = harness(&[(1, 3)], &[item(1, 2)]).await;
        h.catalog.set_offline(true);

        let err = h
            .store
            .update_product_amount(UpdateProductAmount::new(ProductId::new(1), 0))
            .await
            .unwrap_err();

        assert!(matches!(err, CartError::Validation(_)));
        assert_eq!(h.notices(), vec![Notice::error(MSG_INVALID_AMOUNT)]);
    }

    #[tokio::test]
    async fn test_update_absent_product_leaves_items() {
        let h = harness(&[(5, 10)], &[item(1, 2)]).await;

        let cart = h
            .store
            .update_product_amount(UpdateProductAmount::new(ProductId::new(5), 3))
            .await
            .unwrap();

        assert_eq!(cart.items(), &[item(1, 2)]);
        assert_eq!(h.persisted(), Some(cart));
    }

    #[tokio::test]
    async fn test_update_with_catalog_down_reports_add_failure() {
        let mut h = harness(&[(1, 10)], &[item(1, 2)]).await;
        h.catalog.set_offline(true);

        let err = h
            .store
            .update_product_amount(UpdateProductAmount::new(ProductId::new(1), 3))
            .await
            .unwrap_err();

        assert!(matches!(err, CartError::CatalogUnavailable(_)));
        assert_eq!(h.store.cart().await.items(), &[item(1, 2)]);
        assert_eq!(h.notices(), vec![Notice::error(MSG_ADD_FAILED)]);
    }

    // -------------------------------------------------------------------------
    // clear / summary
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_clear() {
        let mut h = harness(&[], &[item(1, 2), item(2, 1)]).await;

        let cart = h.store.clear().await.unwrap();

        assert!(cart.is_empty());
        assert_eq!(h.storage.raw(KEY).as_deref(), Some("[]"));
        assert!(h.notices().is_empty());
    }

    #[tokio::test]
    async fn test_clear_with_failing_storage() {
        let mut h = harness(&[], &[item(1, 2)]).await;
        h.storage.fail_writes(true);

        assert!(h.store.clear().await.is_err());
        assert_eq!(h.store.cart().await.len(), 1);
        assert_eq!(h.notices(), vec![Notice::error(MSG_CLEAR_FAILED)]);
    }

    #[tokio::test]
    async fn test_summary() {
        let h = harness(&[], &[item(1, 2), item(2, 1)]).await;

        let summary = h.store.summary().await;

        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_quantity, 3);
        assert_eq!(summary.subtotal_cents, 3 * 13_990);
    }
}
