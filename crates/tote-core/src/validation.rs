//! # Validation Module
//!
//! Stock and quantity rules for cart operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront UI                                                │
//! │  ├── Decrement button disabled at 1                                    │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: CartStore (tote-store)                                       │
//! │  ├── validate_amount before touching the catalog                       │
//! │  └── THIS MODULE: ensure_stock against a fresh snapshot                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog service                                              │
//! │  └── Owns the real stock figure                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CartError, CartResult, ValidationError};
use crate::types::StockSnapshot;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a requested line-item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ## Example
/// ```rust
/// use tote_core::validation::validate_amount;
///
/// assert!(validate_amount(1).is_ok());
/// assert!(validate_amount(0).is_err());
/// ```
pub fn validate_amount(amount: u32) -> ValidationResult<()> {
    if amount == 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

/// Checks that a stock snapshot covers `requested` units.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart page: shopper bumps quantity to 5                                 │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  GET /stock/{id} → { amount: 3 }                                        │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  ensure_stock(&snapshot, 5) ← THIS FUNCTION                             │
/// │       │                                                                 │
/// │       ├── 3 < 5 → Err(StockInsufficient)                                │
/// │       │                                                                 │
/// │       └── OK → reducer runs, cart persisted                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn ensure_stock(stock: &StockSnapshot, requested: u32) -> CartResult<()> {
    if !stock.covers(requested) {
        return Err(CartError::StockInsufficient {
            product_id: stock.id,
            available: stock.amount,
            requested,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
