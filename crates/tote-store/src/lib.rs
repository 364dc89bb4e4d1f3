//! # tote-store: The Cart Store
//!
//! The live, persisted shopping cart for one storefront session.
//!
//! ## Module Organization
//! ```text
//! tote_store
//! ├── store     - CartStore: add / remove / update / clear, load on startup
//! ├── notifier  - ChannelNotifier (UI toasts), TracingNotifier (log only)
//! └── memory    - MemoryCatalog, MemoryStorage (offline sessions, tests)
//! ```
//!
//! ## Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use tote_core::{ProductDetails, ProductId};
//! use tote_store::{CartStore, MemoryCatalog, MemoryStorage, TracingNotifier};
//!
//! let catalog = MemoryCatalog::new()
//!     .with_product(ProductDetails::new(ProductId::new(1)).with_attribute("price", 179.9), 5);
//!
//! let store = CartStore::load_default(
//!     Arc::new(catalog),
//!     Arc::new(MemoryStorage::new()),
//!     Arc::new(TracingNotifier),
//! )
//! .await;
//!
//! let cart = store.add_product(ProductId::new(1)).await?;
//! assert_eq!(cart.get(ProductId::new(1)).unwrap().amount, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod memory;
pub mod notifier;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use memory::{MemoryCatalog, MemoryStorage};
pub use notifier::{ChannelNotifier, TracingNotifier};
pub use store::{
    CartStore, MSG_ADD_FAILED, MSG_CLEAR_FAILED, MSG_INVALID_AMOUNT, MSG_REMOVED,
    MSG_REMOVE_FAILED, MSG_STOCK_UNAVAILABLE,
};
