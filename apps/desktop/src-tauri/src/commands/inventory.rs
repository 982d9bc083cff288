//! # Inventory Commands
//!
//! Commands behind the inventory table: in-place edits, selection ticks,
//! add/remove rows, reset from source, CSV dump.

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use restock_core::export::INVENTORY_EXPORT_FILE;
use restock_core::ItemField;

use crate::commands::ExportPayload;
use crate::error::ApiError;
use crate::state::{
    autosave_inventory, reset_from_source, section_groups, ConfigState, DbState, SectionGroup,
    WorkbenchState,
};

/// Inventory view: grouped sections plus the flat item count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    pub sections: Vec<SectionGroup>,
    pub item_count: usize,
}

fn inventory_response(workbench: &State<'_, WorkbenchState>) -> InventoryResponse {
    workbench.with_workbench_mut(|wb| InventoryResponse {
        sections: section_groups(wb),
        item_count: wb.inventory().len(),
    })
}

async fn autosave(db: &State<'_, DbState>, workbench: &State<'_, WorkbenchState>) {
    let items = workbench.with_workbench(|wb| wb.inventory().items().to_vec());
    autosave_inventory(db.inner(), &items).await;
}

/// Returns the current inventory, grouped by section.
#[tauri::command]
pub fn get_inventory(workbench: State<'_, WorkbenchState>) -> InventoryResponse {
    debug!("get_inventory command");
    inventory_response(&workbench)
}

/// Edits one field of an inventory row in place.
#[tauri::command]
pub async fn edit_item_field(
    db: State<'_, DbState>,
    workbench: State<'_, WorkbenchState>,
    section: String,
    index: usize,
    field: ItemField,
    value: String,
) -> Result<InventoryResponse, ApiError> {
    debug!(section = %section, index, ?field, "edit_item_field command");

    workbench.with_workbench_mut(|wb| wb.set_field(&section, index, field, &value))?;
    autosave(&db, &workbench).await;
    Ok(inventory_response(&workbench))
}

/// Toggles the staging tick on an inventory row.
#[tauri::command]
pub async fn toggle_item_selected(
    db: State<'_, DbState>,
    workbench: State<'_, WorkbenchState>,
    section: String,
    index: usize,
) -> Result<InventoryResponse, ApiError> {
    debug!(section = %section, index, "toggle_item_selected command");

    workbench.with_workbench_mut(|wb| wb.toggle_selected(&section, index))?;
    autosave(&db, &workbench).await;
    Ok(inventory_response(&workbench))
}

/// Removes an inventory row.
#[tauri::command]
pub async fn remove_item(
    db: State<'_, DbState>,
    workbench: State<'_, WorkbenchState>,
    section: String,
    index: usize,
) -> Result<InventoryResponse, ApiError> {
    debug!(section = %section, index, "remove_item command");

    workbench.with_workbench_mut(|wb| wb.remove_item(&section, index))?;
    autosave(&db, &workbench).await;
    Ok(inventory_response(&workbench))
}

/// Adds a new row to a section from the add-item form.
#[tauri::command]
pub async fn add_item(
    db: State<'_, DbState>,
    workbench: State<'_, WorkbenchState>,
    section: String,
    product: String,
    price: String,
    count: String,
) -> Result<InventoryResponse, ApiError> {
    debug!(section = %section, product = %product, "add_item command");

    workbench.with_workbench_mut(|wb| wb.add_item(&section, &product, &price, &count))?;
    autosave(&db, &workbench).await;
    Ok(inventory_response(&workbench))
}

/// Discards edits and reloads the inventory from the source catalog.
#[tauri::command]
pub async fn reset_inventory(
    db: State<'_, DbState>,
    config: State<'_, ConfigState>,
    workbench: State<'_, WorkbenchState>,
) -> Result<InventoryResponse, ApiError> {
    debug!("reset_inventory command");

    reset_from_source(db.inner(), &config, &workbench).await;
    Ok(inventory_response(&workbench))
}

/// Exports the full inventory as CSV text.
#[tauri::command]
pub fn export_inventory_csv(workbench: State<'_, WorkbenchState>) -> ExportPayload {
    debug!("export_inventory_csv command");

    ExportPayload {
        file_name: INVENTORY_EXPORT_FILE.to_string(),
        content: workbench.with_workbench(|wb| wb.export_inventory_csv()),
    }
}
