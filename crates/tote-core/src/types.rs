//! # Domain Types
//!
//! Core domain types used throughout Tote.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ProductId     │   │  StockSnapshot  │   │ ProductDetails  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  u64 (catalog)  │   │  id             │   │  id             │       │
//! │  │                 │   │  amount         │   │  title, price,  │       │
//! │  │                 │   │  (never cached) │   │  image, ...     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │ UpdateProductAmount │   │     Notice      │   │    Severity     │   │
//! │  │  ─────────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  product_id         │   │  severity       │   │  Success        │   │
//! │  │  amount             │   │  message        │   │  Error          │   │
//! │  └─────────────────────┘   └─────────────────┘   └─────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

// =============================================================================
// Product Id
// =============================================================================

/// Catalog identifier of a product.
///
/// Serialized as a bare JSON number so persisted carts stay compatible with
/// the storefront's existing format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(#[ts(type = "number")] u64);

impl ProductId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Stock Snapshot
// =============================================================================

/// Point-in-time available quantity for a product.
///
/// Always fetched fresh from the catalog before a quantity change; the store
/// never caches these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StockSnapshot {
    /// Product the reading belongs to.
    pub id: ProductId,

    /// Units available for purchase.
    pub amount: u32,
}

impl StockSnapshot {
    pub const fn new(id: ProductId, amount: u32) -> Self {
        StockSnapshot { id, amount }
    }

    /// Returns true if `requested` units can be satisfied.
    #[inline]
    pub const fn covers(&self, requested: u32) -> bool {
        self.amount >= requested
    }
}

// =============================================================================
// Product Details
// =============================================================================

/// Product record as returned by the catalog.
///
/// Only `id` is interpreted. Everything else (title, price, image, ...) is
/// carried verbatim into the line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub id: ProductId,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl ProductDetails {
    pub fn new(id: ProductId) -> Self {
        ProductDetails {
            id,
            attributes: Map::new(),
        }
    }

    /// Builder-style attribute setter, mostly useful in tests and fixtures.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

// =============================================================================
// Update Request
// =============================================================================

/// Payload of an explicit quantity change coming from the cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: u32,
}

impl UpdateProductAmount {
    pub const fn new(product_id: ProductId, amount: u32) -> Self {
        UpdateProductAmount { product_id, amount }
    }
}

// =============================================================================
// Notices
// =============================================================================

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Severity {
    Success,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A message for the shopper (rendered as a toast by the UI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
