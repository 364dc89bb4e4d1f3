//! # tote-core: Pure Cart Logic for Tote
//!
//! This crate is the **heart** of Tote. It contains the cart's state
//! transitions as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Tote Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI                                │   │
//! │  │    Product grid ──► Header badge ──► Cart page                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tote-store (CartStore)                       │   │
//! │  │    add_product, remove_product, update_product_amount           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tote-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │   ports   │  │ validation│  │   │
//! │  │   │ ProductId │  │   Cart    │  │  Catalog  │  │   stock   │  │   │
//! │  │   │  Stock    │  │ LineItem  │  │  Storage  │  │  amounts  │  │   │
//! │  │   │  Notice   │  │ reducers  │  │  Notifier │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                 ▲                                   ▲                   │
//! │  ┌──────────────┴──────────────┐   ┌────────────────┴──────────────┐   │
//! │  │ tote-db (PersistentStore)   │   │ tote-catalog (CatalogService) │   │
//! │  └─────────────────────────────┘   └───────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductId, StockSnapshot, Notice, ...)
//! - [`cart`] - Cart and LineItem plus the pure reducers
//! - [`error`] - Cart error taxonomy
//! - [`validation`] - Stock and quantity rules
//! - [`ports`] - Traits for the catalog, the persistent store and the notifier
//!
//! ## Example Usage
//!
//! ```rust
//! use tote_core::{plan_add, AddPlan, Cart, ProductId, StockSnapshot};
//!
//! let cart = Cart::new();
//! let stock = StockSnapshot::new(ProductId::new(1), 5);
//!
//! // An empty cart always plans an insert when stock is available
//! assert_eq!(plan_add(&cart, &stock).unwrap(), AddPlan::Insert);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod ports;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{plan_add, AddPlan, Cart, CartSummary, LineItem};
pub use error::{CartError, CartResult, CatalogError, StorageError, ValidationError};
pub use ports::{CatalogService, Notifier, PersistentStore};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key holding the serialized cart.
///
/// Carts written by earlier storefront builds live under this key, so it is
/// kept as the default to stay readable across upgrades.
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Quantity a product enters the cart with.
pub const INITIAL_AMOUNT: u32 = 1;
