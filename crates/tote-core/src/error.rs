//! # Error Types
//!
//! Domain-specific error types for tote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tote-core errors (this file)                                          │
//! │  ├── CartError        - What a cart operation can fail with            │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  ├── CatalogError     - Catalog port failures                          │
//! │  └── StorageError     - Persistent store port failures                 │
//! │                                                                         │
//! │  tote-db errors (separate crate)                                       │
//! │  └── DbError          - SQLite failures, mapped into StorageError      │
//! │                                                                         │
//! │  Flow: reqwest/sqlx → CatalogError/StorageError → CartError → Notice   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, amounts)
//! 3. Business rejections and infrastructure failures are separate variants

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Cart Error
// =============================================================================

/// Everything a cart operation can fail with.
#[derive(Debug, Error)]
pub enum CartError {
    /// The catalog does not have enough units for the requested quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "add" (cart has 1, wants 2)
    ///      │
    ///      ▼
    /// GET /stock/1 → { amount: 1 }
    ///      │
    ///      ▼
    /// StockInsufficient { product_id: 1, available: 1, requested: 2 }
    ///      │
    ///      ▼
    /// Toast: "Requested quantity unavailable"
    /// ```
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    StockInsufficient {
        product_id: ProductId,
        available: u32,
        requested: u32,
    },

    /// The catalog could not be reached or answered with garbage.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),

    /// The persistent store rejected a read or write.
    #[error("Storage failure: {0}")]
    StorageFailure(#[from] StorageError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CartError {
    /// Returns true for business-rule rejections (as opposed to failures).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            CartError::StockInsufficient { .. } | CartError::Validation(_)
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. an unparsable persisted cart).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Port Errors
// =============================================================================

/// Failures talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (connection refused, timeout, ...).
    #[error("Catalog request failed: {0}")]
    Request(String),

    /// The catalog answered with a non-success status.
    #[error("Catalog returned status {status} for {path}")]
    Status { status: u16, path: String },

    /// The response body did not match the expected shape.
    #[error("Catalog response could not be decoded: {0}")]
    Decode(String),
}

/// Failures reading or writing the persisted cart.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage backend itself failed.
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// The cart could not be encoded for storage.
    #[error("Cart serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
