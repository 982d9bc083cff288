//! # Snapshot Repository
//!
//! Read/write access to the keyed JSON snapshots.
//!
//! ## Keys
//! ```text
//! ┌────────────────────┬──────────────────────────────────────────────┐
//! │ inventory-data-v1  │ full inventory collection                    │
//! │ staged-items-v1    │ staged items                                 │
//! │ staged-history-v1  │ history ledger (array of snapshots, cap 10)  │
//! └────────────────────┴──────────────────────────────────────────────┘
//! ```
//! The `inventory-data-v1` name is carried over from the browser
//! version's `localStorage` key so the meaning of "v1" stays aligned.
//!
//! ## Degradation
//! `load` returns `Ok(None)` both for a missing key and for a payload
//! that no longer parses (logged with a warning). Callers treat both as
//! "no saved data"; only real query failures propagate.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{debug, warn};

use restock_core::{HistoryLedger, InventoryItem, StagedItem};

use crate::error::StoreResult;

/// The logical storage keys.
pub mod keys {
    /// Full inventory collection.
    pub const INVENTORY: &str = "inventory-data-v1";
    /// Staged items.
    pub const STAGED: &str = "staged-items-v1";
    /// History ledger.
    pub const HISTORY: &str = "staged-history-v1";
}

/// Repository for snapshot reads and writes.
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    pool: SqlitePool,
}

impl SnapshotRepository {
    /// Creates a new SnapshotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SnapshotRepository { pool }
    }

    // =========================================================================
    // Raw Access
    // =========================================================================

    /// Upserts a raw payload under a key.
    pub async fn write_raw(&self, key: &str, payload: &str) -> StoreResult<()> {
        debug!(key = %key, bytes = payload.len(), "Writing snapshot");

        sqlx::query(
            "INSERT INTO snapshots (key, payload, updated_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT(key) DO UPDATE SET \
             payload = excluded.payload, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(payload)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Reads the raw payload under a key, `None` when absent.
    pub async fn read_raw(&self, key: &str) -> StoreResult<Option<String>> {
        let payload: Option<String> =
            sqlx::query_scalar("SELECT payload FROM snapshots WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(payload)
    }

    /// Removes a key. Returns whether a row was deleted.
    pub async fn remove(&self, key: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM snapshots WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // =========================================================================
    // Typed Access
    // =========================================================================

    /// Saves a value as JSON under a key.
    pub async fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let payload = serde_json::to_string(value)?;
        self.write_raw(key, &payload).await
    }

    /// Loads a value from a key.
    ///
    /// Missing key or malformed payload both load as `None`.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(payload) = self.read_raw(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&payload) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(key = %key, error = %err, "Discarding malformed snapshot");
                Ok(None)
            }
        }
    }

    // =========================================================================
    // Workspace Keys
    // =========================================================================

    pub async fn save_inventory(&self, items: &[InventoryItem]) -> StoreResult<()> {
        self.save(keys::INVENTORY, &items).await
    }

    pub async fn load_inventory(&self) -> StoreResult<Option<Vec<InventoryItem>>> {
        self.load(keys::INVENTORY).await
    }

    pub async fn save_staged(&self, items: &[StagedItem]) -> StoreResult<()> {
        self.save(keys::STAGED, &items).await
    }

    pub async fn load_staged(&self) -> StoreResult<Option<Vec<StagedItem>>> {
        self.load(keys::STAGED).await
    }

    pub async fn save_history(&self, history: &HistoryLedger) -> StoreResult<()> {
        self.save(keys::HISTORY, history).await
    }

    pub async fn load_history(&self) -> StoreResult<Option<HistoryLedger>> {
        self.load(keys::HISTORY).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn repo() -> SnapshotRepository {
        Database::new(DbConfig::in_memory())
            .await
            .unwrap()
            .snapshots()
    }

    #[tokio::test]
    async fn test_raw_round_trip_and_upsert() {
        let repo = repo().await;

        assert_eq!(repo.read_raw("k").await.unwrap(), None);

        repo.write_raw("k", "one").await.unwrap();
        assert_eq!(repo.read_raw("k").await.unwrap().as_deref(), Some("one"));

        repo.write_raw("k", "two").await.unwrap();
        assert_eq!(repo.read_raw("k").await.unwrap().as_deref(), Some("two"));
    }

    #[tokio::test]
    async fn test_remove() {
        let repo = repo().await;
        repo.write_raw("k", "payload").await.unwrap();

        assert!(repo.remove("k").await.unwrap());
        assert!(!repo.remove("k").await.unwrap());
        assert_eq!(repo.read_raw("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_inventory_round_trip() {
        let repo = repo().await;
        let items = vec![
            InventoryItem::new("Dairy", "Milk", "$3.50", 12),
            InventoryItem::new("Pantry", "Rice", "$10.00", 5),
        ];

        repo.save_inventory(&items).await.unwrap();
        let loaded = repo.load_inventory().await.unwrap().unwrap();
        assert_eq!(loaded, items);
    }

    #[tokio::test]
    async fn test_staged_and_history_round_trip() {
        let repo = repo().await;
        let item = InventoryItem::new("Dairy", "Milk", "$3.50", 12);
        let mut staged = StagedItem::from_inventory(&item);
        staged.ask_count = 4;

        let mut history = HistoryLedger::new();
        history.record(std::slice::from_ref(&staged));

        repo.save_staged(std::slice::from_ref(&staged)).await.unwrap();
        repo.save_history(&history).await.unwrap();

        assert_eq!(
            repo.load_staged().await.unwrap().unwrap(),
            vec![staged.clone()]
        );
        assert_eq!(repo.load_history().await.unwrap().unwrap(), history);
    }

    #[tokio::test]
    async fn test_malformed_payload_loads_as_none() {
        let repo = repo().await;
        repo.write_raw(keys::INVENTORY, "{not json").await.unwrap();

        let loaded = repo.load_inventory().await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_missing_key_loads_as_none() {
        let repo = repo().await;
        assert!(repo.load_staged().await.unwrap().is_none());
        assert!(repo.load_history().await.unwrap().is_none());
    }
}
