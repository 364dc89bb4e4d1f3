//! # tote-db: Persistent Store for Tote
//!
//! This crate keeps the serialized cart in a local SQLite database so it
//! survives session restarts. It uses sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tote Data Flow                                   │
//! │                                                                         │
//! │  CartStore (successful mutation)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     tote-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │   Repositories     │  │ Migrations │  │   │
//! │  │   │   (pool.rs)   │    │ (cart_storage.rs)  │  │ (embedded) │  │   │
//! │  │   │               │    │                    │  │            │  │   │
//! │  │   │ SqlitePool    │◄───│ CartStorageRepo    │  │ 001_cart_  │  │   │
//! │  │   │               │    │ impl PersistentStore│ │  storage   │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tote.db (single cart_storage table)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tote_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/tote.db")).await?;
//! let storage = db.cart_storage();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::cart_storage::CartStorageRepository;
