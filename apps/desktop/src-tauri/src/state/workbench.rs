//! # Workbench State
//!
//! Shell-side ownership of the core [`Workbench`] plus the glue between
//! it and the snapshot store: initial load, autosave, reset from source,
//! explicit save/restore.
//!
//! ## Thread Safety
//! The workbench is wrapped in `Arc<Mutex<T>>`:
//! 1. Multiple commands may access/modify it
//! 2. Only one command should modify it at a time
//! 3. Shell commands can run concurrently
//!
//! ## Persistence Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  startup ──► saved inventory? ──yes──► Workbench::from_parts            │
//! │                    │ no                                                 │
//! │                    ▼                                                    │
//! │              read source CSV ──parse──► items (failure: empty, logged)  │
//! │                                                                         │
//! │  after every mutation:  autosave (best effort, failures logged)         │
//! │    inventory key is only written while the collection is non-empty      │
//! │                                                                         │
//! │  reset from source: remove inventory key, re-read the CSV               │
//! │  explicit restore: missing/bad data is a user-visible error             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use restock_core::source::parse_source_csv;
use restock_core::{
    DiscountRate, HistoryLedger, InventoryItem, StagedItem, Workbench,
};
use restock_store::{keys, Database, StoreResult};

use crate::state::ConfigState;

// =============================================================================
// DTOs
// =============================================================================

/// One rendered section: name plus its items, in inventory order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionGroup {
    pub name: String,
    pub items: Vec<InventoryItem>,
}

/// Builds the grouped view the inventory table renders.
pub fn section_groups(workbench: &mut Workbench) -> Vec<SectionGroup> {
    workbench.with_sections(|sections, items| {
        sections
            .iter()
            .map(|section| SectionGroup {
                name: section.name.clone(),
                items: section.rows.iter().map(|&i| items[i].clone()).collect(),
            })
            .collect()
    })
}

// =============================================================================
// Workbench State
// =============================================================================

/// Shell-managed workbench state.
#[derive(Debug, Default)]
pub struct WorkbenchState {
    workbench: Arc<Mutex<Workbench>>,
}

impl WorkbenchState {
    /// Creates an empty workbench state.
    pub fn new() -> Self {
        WorkbenchState::default()
    }

    /// Creates the state from an already loaded workbench.
    pub fn from_workbench(workbench: Workbench) -> Self {
        WorkbenchState {
            workbench: Arc::new(Mutex::new(workbench)),
        }
    }

    /// Executes a function with read access to the workbench.
    pub fn with_workbench<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Workbench) -> R,
    {
        let workbench = self.workbench.lock().expect("Workbench mutex poisoned");
        f(&workbench)
    }

    /// Executes a function with write access to the workbench.
    pub fn with_workbench_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Workbench) -> R,
    {
        let mut workbench = self.workbench.lock().expect("Workbench mutex poisoned");
        f(&mut workbench)
    }
}

// =============================================================================
// Source Catalog
// =============================================================================

/// Reads and parses the source catalog CSV.
///
/// Any failure (missing file, unreadable, nothing parseable) degrades to
/// `None` with a warning; the caller falls back to an empty inventory.
pub async fn load_source_items(config: &ConfigState) -> Option<Vec<InventoryItem>> {
    let text = match tokio::fs::read_to_string(&config.source_path).await {
        Ok(text) => text,
        Err(err) => {
            warn!(
                path = %config.source_path.display(),
                error = %err,
                "Failed to read source catalog"
            );
            return None;
        }
    };

    let parsed = parse_source_csv(&text);
    if parsed.skipped > 0 {
        warn!(skipped = parsed.skipped, "Source catalog records skipped");
    }
    info!(count = parsed.items.len(), "Parsed source catalog");
    Some(parsed.items)
}

// =============================================================================
// Startup Load
// =============================================================================

fn or_none<T>(result: StoreResult<Option<T>>, key: &str) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(err) => {
            warn!(key = %key, error = %err, "Failed to read saved snapshot");
            None
        }
    }
}

/// Loads the initial workbench.
///
/// Saved inventory wins over the source catalog; staged items and
/// history restore alongside when present. Every failure on this path is
/// silent (logged), the app always starts.
pub async fn load_initial_workbench(db: &Database, config: &ConfigState) -> Workbench {
    let snapshots = db.snapshots();

    let inventory = match or_none(snapshots.load_inventory().await, keys::INVENTORY) {
        Some(items) => {
            info!(count = items.len(), "Loaded inventory from storage");
            Some(items)
        }
        None => {
            info!("No saved inventory, reading source catalog");
            load_source_items(config).await
        }
    };
    let staged = or_none(snapshots.load_staged().await, keys::STAGED);
    let history = or_none(snapshots.load_history().await, keys::HISTORY);

    let mut workbench = Workbench::from_parts(inventory, staged, history);
    workbench.set_discount(DiscountRate::from_percent(
        config.default_discount_percent as i64,
    ));
    workbench
}

// =============================================================================
// Autosave
// =============================================================================

/// Saves the inventory snapshot, best effort.
///
/// An empty collection is never written, matching the legacy tool: a
/// failed source load must not wipe a previously saved inventory.
pub async fn autosave_inventory(db: &Database, items: &[InventoryItem]) {
    if items.is_empty() {
        debug!("Skipping inventory autosave, collection is empty");
        return;
    }
    if let Err(err) = db.snapshots().save_inventory(items).await {
        warn!(error = %err, "Inventory autosave failed");
    }
}

/// Saves the staged items and history snapshots, best effort.
pub async fn autosave_stage(db: &Database, staged: &[StagedItem], history: &HistoryLedger) {
    let snapshots = db.snapshots();
    if let Err(err) = snapshots.save_staged(staged).await {
        warn!(error = %err, "Staged-items autosave failed");
    }
    if let Err(err) = snapshots.save_history(history).await {
        warn!(error = %err, "History autosave failed");
    }
}

// =============================================================================
// Reset / Save / Restore
// =============================================================================

/// Discards the saved inventory and reloads it from the source catalog.
/// Staged items stay untouched. Returns the new item count.
pub async fn reset_from_source(
    db: &Database,
    config: &ConfigState,
    state: &WorkbenchState,
) -> usize {
    if let Err(err) = db.snapshots().remove(keys::INVENTORY).await {
        warn!(error = %err, "Failed to remove saved inventory");
    }

    let items = load_source_items(config).await.unwrap_or_default();
    let count = items.len();
    state.with_workbench_mut(|wb| wb.load_inventory(items));
    info!(count, "Inventory reset from source");
    count
}

/// Explicitly saves all three workspace snapshots.
///
/// Unlike autosave, failures propagate: the user asked for the save and
/// gets told when it did not happen.
pub async fn save_workspace(db: &Database, state: &WorkbenchState) -> StoreResult<()> {
    let (inventory, staged, history) = state.with_workbench(|wb| {
        (
            wb.inventory().items().to_vec(),
            wb.staged().to_vec(),
            wb.history().clone(),
        )
    });

    let snapshots = db.snapshots();
    snapshots.save_inventory(&inventory).await?;
    snapshots.save_staged(&staged).await?;
    snapshots.save_history(&history).await?;
    info!("Workspace saved");
    Ok(())
}

/// Explicitly restores the workspace from storage.
///
/// Returns `Ok(false)` when no key held usable data; the command layer
/// turns that into a user-visible notice.
pub async fn restore_workspace(db: &Database, state: &WorkbenchState) -> StoreResult<bool> {
    let snapshots = db.snapshots();
    let inventory = snapshots.load_inventory().await?;
    let staged = snapshots.load_staged().await?;
    let history = snapshots.load_history().await?;

    if inventory.is_none() && staged.is_none() && history.is_none() {
        return Ok(false);
    }

    state.with_workbench_mut(|wb| {
        *wb = Workbench::from_parts(inventory, staged, history);
    });
    info!("Workspace restored from storage");
    Ok(true)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use restock_store::DbConfig;
    use std::path::PathBuf;

    async fn memory_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn config_with_source(path: PathBuf) -> ConfigState {
        ConfigState {
            source_path: path,
            ..ConfigState::default()
        }
    }

    fn write_source(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("Inventory.csv");
        std::fs::write(
            &path,
            "Section,Product,Unit Price,Count,Description\n\
             Dairy,Milk,$3.50,12,Whole milk\n\
             Pantry,Rice,$10.00,5,Long grain\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn test_with_workbench_round_trip() {
        let state = WorkbenchState::new();
        state.with_workbench_mut(|wb| {
            wb.load_inventory(vec![InventoryItem::new("Dairy", "Milk", "$3.50", 12)]);
        });
        let len = state.with_workbench(|wb| wb.inventory().len());
        assert_eq!(len, 1);
    }

    #[test]
    fn test_section_groups_dto() {
        let mut wb = Workbench::new();
        wb.load_inventory(vec![
            InventoryItem::new("Dairy", "Milk", "$3.50", 12),
            InventoryItem::new("Pantry", "Rice", "$10.00", 5),
            InventoryItem::new("Dairy", "Yogurt", "$1.25", 30),
        ]);

        let groups = section_groups(&mut wb);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Dairy");
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].items[0].product, "Rice");
    }

    #[tokio::test]
    async fn test_initial_load_prefers_saved_inventory() {
        let db = memory_db().await;
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_source(write_source(&dir));

        let saved = vec![InventoryItem::new("Saved", "Thing", "$1.00", 1)];
        db.snapshots().save_inventory(&saved).await.unwrap();

        let wb = load_initial_workbench(&db, &config).await;
        assert_eq!(wb.inventory().len(), 1);
        assert_eq!(wb.inventory().items()[0].section, "Saved");
    }

    #[tokio::test]
    async fn test_initial_load_falls_back_to_source() {
        let db = memory_db().await;
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_source(write_source(&dir));

        let wb = load_initial_workbench(&db, &config).await;
        assert_eq!(wb.inventory().len(), 2);
        assert_eq!(wb.inventory().items()[0].product, "Milk");
    }

    #[tokio::test]
    async fn test_initial_load_survives_missing_source() {
        let db = memory_db().await;
        let config = config_with_source(PathBuf::from("/nonexistent/Inventory.csv"));

        let wb = load_initial_workbench(&db, &config).await;
        assert!(wb.inventory().is_empty());
    }

    #[tokio::test]
    async fn test_initial_load_survives_malformed_snapshot() {
        let db = memory_db().await;
        let config = config_with_source(PathBuf::from("/nonexistent/Inventory.csv"));
        db.snapshots()
            .write_raw(keys::INVENTORY, "{broken")
            .await
            .unwrap();

        let wb = load_initial_workbench(&db, &config).await;
        assert!(wb.inventory().is_empty());
    }

    #[tokio::test]
    async fn test_autosave_inventory_skips_empty() {
        let db = memory_db().await;
        let items = vec![InventoryItem::new("Dairy", "Milk", "$3.50", 12)];
        autosave_inventory(&db, &items).await;

        // An empty autosave must not clobber the saved snapshot.
        autosave_inventory(&db, &[]).await;
        let loaded = db.snapshots().load_inventory().await.unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[tokio::test]
    async fn test_reset_from_source_discards_saved_state() {
        let db = memory_db().await;
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_source(write_source(&dir));

        let saved = vec![InventoryItem::new("Saved", "Thing", "$1.00", 1)];
        db.snapshots().save_inventory(&saved).await.unwrap();
        let state = WorkbenchState::from_workbench(Workbench::from_parts(
            Some(saved),
            None,
            None,
        ));

        let count = reset_from_source(&db, &config, &state).await;
        assert_eq!(count, 2);
        assert!(db.snapshots().load_inventory().await.unwrap().is_none());
        state.with_workbench(|wb| {
            assert_eq!(wb.inventory().items()[0].product, "Milk");
        });
    }

    #[tokio::test]
    async fn test_save_and_restore_workspace() {
        let db = memory_db().await;
        let state = WorkbenchState::new();
        state.with_workbench_mut(|wb| {
            wb.load_inventory(vec![InventoryItem::new("Dairy", "Milk", "$3.50", 12)]);
            wb.toggle_selected("Dairy", 0).unwrap();
            wb.generate_stage();
            wb.set_ask_count(0, "4").unwrap();
        });

        save_workspace(&db, &state).await.unwrap();

        // Wipe in-memory state, then restore.
        state.with_workbench_mut(|wb| *wb = Workbench::new());
        assert!(restore_workspace(&db, &state).await.unwrap());

        state.with_workbench(|wb| {
            assert_eq!(wb.inventory().len(), 1);
            assert_eq!(wb.staged()[0].ask_count, 4);
            assert_eq!(wb.history().len(), 2);
        });
    }

    #[tokio::test]
    async fn test_restore_workspace_with_nothing_saved() {
        let db = memory_db().await;
        let state = WorkbenchState::new();
        assert!(!restore_workspace(&db, &state).await.unwrap());
    }
}
