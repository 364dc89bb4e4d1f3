//! # Repository Module
//!
//! Database repository implementations for Tote.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CartStore                                                             │
//! │       │                                                                 │
//! │       │  storage.set("@RocketShoes:cart", "[...]")                     │
//! │       ▼                                                                 │
//! │  CartStorageRepository (impl PersistentStore)                          │
//! │  ├── get(&self, key)                                                   │
//! │  ├── set(&self, key, value)                                            │
//! │  └── delete(&self, key)                                                │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CartStorageRepository`](cart_storage::CartStorageRepository) - cart blob key-value storage

pub mod cart_storage;
