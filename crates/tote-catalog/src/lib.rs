//! # tote-catalog: Catalog Service Client
//!
//! Talks to the storefront's catalog API over HTTP and exposes it through the
//! [`CatalogService`](tote_core::CatalogService) port.
//!
//! ## Endpoints
//! ```text
//! GET {base}/stock/{id}     → { "id": 1, "amount": 3 }
//! GET {base}/products/{id}  → { "id": 1, "title": "...", "price": 179.9, "image": "..." }
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use tote_catalog::{CatalogConfig, HttpCatalog};
//!
//! let config = CatalogConfig::new("http://localhost:3333".parse()?);
//! let catalog = HttpCatalog::new(config)?;
//! let stock = catalog.stock(ProductId::new(1)).await?;
//! ```

pub mod client;

pub use client::{CatalogConfig, HttpCatalog};
