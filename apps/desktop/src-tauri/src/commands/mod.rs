//! # Shell Commands Module
//!
//! All commands exposed to the frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports, shared DTOs)
//! ├── inventory.rs  ◄─── Inventory table: edit, select, add, remove, reset
//! ├── stage.rs      ◄─── Stage table: generate, ask counts, restore prior
//! ├── invoice.rs    ◄─── Invoice view: totals, discount, manual override
//! └── workspace.rs  ◄─── Explicit save/restore of all snapshots
//! ```
//!
//! ## How Commands Work
//! ```text
//! Frontend:  const inv = await invoke('edit_item_field', {
//!              section: 'Dairy', index: 0, field: 'unitPrice', value: '4.99'
//!            });
//!                 │  (IPC via WebView)
//!                 ▼
//! Backend:   #[tauri::command]
//!            async fn edit_item_field(
//!                db: State<'_, DbState>,          ◄── injected
//!                workbench: State<'_, WorkbenchState>,
//!                section: String, index: usize, ...
//!            ) -> Result<InventoryResponse, ApiError>
//! ```
//!
//! Every mutating command autosaves the affected snapshots afterwards,
//! best effort; the save never blocks or fails the UI action itself.

pub mod inventory;
pub mod invoice;
pub mod stage;
pub mod workspace;

use serde::{Deserialize, Serialize};

/// A file export handed to the frontend for download.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub file_name: String,
    pub content: String,
}
