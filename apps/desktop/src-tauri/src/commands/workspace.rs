//! # Workspace Commands
//!
//! Explicit save and restore of all three snapshots. Unlike the
//! per-mutation autosave, these surface failures to the user.

use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{self, DbState, WorkbenchState};

/// Saves inventory, staged items and history to storage.
#[tauri::command]
pub async fn save_workspace(
    db: State<'_, DbState>,
    workbench: State<'_, WorkbenchState>,
) -> Result<(), ApiError> {
    debug!("save_workspace command");
    state::save_workspace(db.inner(), &workbench).await?;
    Ok(())
}

/// Restores the workspace from storage.
///
/// Finding nothing usable is a user-visible notice, not a silent
/// fallback: the user explicitly asked for the restore.
#[tauri::command]
pub async fn restore_workspace(
    db: State<'_, DbState>,
    workbench: State<'_, WorkbenchState>,
) -> Result<(), ApiError> {
    debug!("restore_workspace command");

    let restored = state::restore_workspace(db.inner(), &workbench).await?;
    if restored {
        Ok(())
    } else {
        Err(ApiError::no_saved_data())
    }
}
