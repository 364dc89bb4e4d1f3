//! # tote-session: Storefront Cart Session
//!
//! Opens the shopper's cart with the real adapters behind it.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Session Startup                                    │
//! │                                                                         │
//! │  1. SessionConfig::load(path) ─────────────────────────────────────────►│
//! │     • defaults → tote.toml → TOTE_* environment → validate              │
//! │                                                                         │
//! │  2. telemetry::init_tracing(&config.logging) ──────────────────────────►│
//! │     • EnvFilter, RUST_LOG wins; optional JSON lines                     │
//! │                                                                         │
//! │  3. Session::open(config) ─────────────────────────────────────────────►│
//! │     • SQLite pool + migrations (tote-db)                                │
//! │     • HTTP catalog client (tote-catalog)                                │
//! │     • CartStore::load restores the persisted cart                       │
//! │                                                                         │
//! │  4. UI drains session.take_notices() and calls session.store()         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod telemetry;

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

use tote_catalog::HttpCatalog;
use tote_core::{CatalogService, Notice};
use tote_db::Database;
use tote_store::{CartStore, ChannelNotifier};

pub use config::{CatalogSettings, LoggingSettings, SessionConfig, StorageSettings};
pub use error::{SessionError, SessionResult};

/// One shopper's cart session.
///
/// The store is handed out by `Arc` to whatever UI component needs it; the
/// session owns the database pool and closes it on [`Session::close`].
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    database: Database,
    store: Arc<CartStore>,
    notices: Option<UnboundedReceiver<Notice>>,
}

impl Session {
    /// Opens a session against the configured catalog API.
    pub async fn open(config: SessionConfig) -> SessionResult<Self> {
        let catalog = HttpCatalog::new(config.catalog_config()?)?;
        info!(base_url = %catalog.base_url(), "Catalog client ready");

        Self::open_with_catalog(config, Arc::new(catalog)).await
    }

    /// Opens a session with a caller-supplied catalog.
    pub async fn open_with_catalog(
        config: SessionConfig,
        catalog: Arc<dyn CatalogService>,
    ) -> SessionResult<Self> {
        config.validate()?;
        let database = Database::new(config.db_config()?).await?;
        let (notifier, notices) = ChannelNotifier::new();

        let store = CartStore::load(
            catalog,
            Arc::new(database.cart_storage()),
            Arc::new(notifier),
            config.storage.key.clone(),
        )
        .await;

        info!(key = %store.key(), "Cart session opened");

        Ok(Session {
            config,
            database,
            store: Arc::new(store),
            notices: Some(notices),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The cart store for this session.
    pub fn store(&self) -> Arc<CartStore> {
        Arc::clone(&self.store)
    }

    /// Hands the notice receiver to the UI. Returns `None` after the first
    /// call.
    pub fn take_notices(&mut self) -> Option<UnboundedReceiver<Notice>> {
        self.notices.take()
    }

    /// Closes the database pool.
    pub async fn close(self) {
        info!("Closing cart session");
        self.database.close().await;
    }
}
