//! # Cart Storage Repository
//!
//! Key-value rows holding the serialized cart.
//!
//! Every successful cart mutation overwrites the whole row for its key
//! (full-cart replace, never incremental), so an upsert is all that's needed.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use tote_core::{PersistentStore, StorageError};

/// Repository for the `cart_storage` table.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CartStorageRepository::new(pool);
///
/// repo.put("@RocketShoes:cart", "[]").await?;
/// let blob = repo.fetch("@RocketShoes:cart").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CartStorageRepository {
    pool: SqlitePool,
}

impl CartStorageRepository {
    /// Creates a new CartStorageRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CartStorageRepository { pool }
    }

    /// Reads the value stored under `key`.
    pub async fn fetch(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM cart_storage WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        debug!(key = %key, found = value.is_some(), "Fetched cart storage row");
        Ok(value)
    }

    /// Inserts or replaces the value stored under `key`.
    pub async fn put(&self, key: &str, value: &str) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO cart_storage (key, value, updated_at)
            VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        debug!(key = %key, bytes = value.len(), "Stored cart storage row");
        Ok(())
    }

    /// Deletes the row for `key`. Returns true if a row was removed.
    pub async fn delete(&self, key: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM cart_storage WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl PersistentStore for CartStorageRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.fetch(key).await?)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(self.put(key, value).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
