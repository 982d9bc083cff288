//! # Stage Commands
//!
//! Commands behind the staged-items table: generating the stage from the
//! selection, editing ask counts, restoring the prior ask-count state.

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use restock_core::StagedItem;

use crate::error::ApiError;
use crate::state::{autosave_stage, DbState, WorkbenchState};

/// Stage view: staged items plus the history depth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageResponse {
    pub items: Vec<StagedItem>,
    pub history_len: usize,
}

fn stage_response(workbench: &State<'_, WorkbenchState>) -> StageResponse {
    workbench.with_workbench(|wb| StageResponse {
        items: wb.staged().to_vec(),
        history_len: wb.history().len(),
    })
}

async fn autosave(db: &State<'_, DbState>, workbench: &State<'_, WorkbenchState>) {
    let (staged, history) =
        workbench.with_workbench(|wb| (wb.staged().to_vec(), wb.history().clone()));
    autosave_stage(db.inner(), &staged, &history).await;
}

/// Returns the current stage.
#[tauri::command]
pub fn get_stage(workbench: State<'_, WorkbenchState>) -> StageResponse {
    debug!("get_stage command");
    stage_response(&workbench)
}

/// Replaces the stage with copies of the selected inventory rows.
#[tauri::command]
pub async fn generate_stage(
    db: State<'_, DbState>,
    workbench: State<'_, WorkbenchState>,
) -> Result<StageResponse, ApiError> {
    debug!("generate_stage command");

    workbench.with_workbench_mut(|wb| wb.generate_stage());
    autosave(&db, &workbench).await;
    Ok(stage_response(&workbench))
}

/// Sets the ask count on a staged row.
#[tauri::command]
pub async fn set_ask_count(
    db: State<'_, DbState>,
    workbench: State<'_, WorkbenchState>,
    index: usize,
    value: String,
) -> Result<StageResponse, ApiError> {
    debug!(index, value = %value, "set_ask_count command");

    workbench.with_workbench_mut(|wb| wb.set_ask_count(index, &value))?;
    autosave(&db, &workbench).await;
    Ok(stage_response(&workbench))
}

/// Restores the previous ask-count state from history.
#[tauri::command]
pub async fn restore_prior_ask_counts(
    db: State<'_, DbState>,
    workbench: State<'_, WorkbenchState>,
) -> Result<StageResponse, ApiError> {
    debug!("restore_prior_ask_counts command");

    workbench.with_workbench_mut(|wb| wb.restore_prior_ask_counts());
    autosave(&db, &workbench).await;
    Ok(stage_response(&workbench))
}
