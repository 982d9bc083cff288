//! # Restock Desktop Library
//!
//! Core library for the Restock desktop application.
//!
//! ## Module Organization
//! ```text
//! restock_desktop_lib/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── workbench.rs◄─── Workbench state + persistence glue
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/       ◄─── IPC commands (feature "tauri")
//! │   ├── inventory.rs
//! │   ├── stage.rs
//! │   ├── invoice.rs
//! │   └── workspace.rs
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! The state layer and error type compile unconditionally and carry all
//! behavior; the `tauri` feature only adds the window shell and the IPC
//! command wrappers around them.

#[cfg(feature = "tauri")]
pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "tauri")]
use restock_store::{Database, DbConfig};

#[cfg(feature = "tauri")]
use state::{ConfigState, DbState, WorkbenchState};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages
/// - `RUST_LOG=restock=trace` - trace for restock crates only
/// - Default: INFO, with sqlx noise turned down
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,restock=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Tracing initialized");
}

/// Runs the desktop application.
///
/// ## Startup Sequence
/// 1. Initialize logging (tracing-subscriber with env filter)
/// 2. Resolve configuration (`RESTOCK_*` env overrides)
/// 3. Open the database and run migrations
/// 4. Load the workbench: saved snapshots, else the source catalog
/// 5. Register state and commands, launch the window
#[cfg(feature = "tauri")]
pub fn run() {
    init_tracing();

    info!("Starting Restock Desktop Application");

    tauri::Builder::default()
        .setup(|app| {
            use tauri::Manager;

            let config = ConfigState::from_env();
            let db_path = config.resolve_database_path()?;
            info!(?db_path, "Database path determined");

            let (db, workbench) = tauri::async_runtime::block_on(async {
                let db = Database::new(DbConfig::new(db_path)).await?;
                let workbench = state::load_initial_workbench(&db, &config).await;
                Ok::<_, restock_store::StoreError>((db, workbench))
            })?;

            info!("Database connected and workbench loaded");

            app.manage(DbState::new(db));
            app.manage(WorkbenchState::from_workbench(workbench));
            app.manage(config);

            info!("State initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Inventory commands
            commands::inventory::get_inventory,
            commands::inventory::edit_item_field,
            commands::inventory::toggle_item_selected,
            commands::inventory::remove_item,
            commands::inventory::add_item,
            commands::inventory::reset_inventory,
            commands::inventory::export_inventory_csv,
            // Stage commands
            commands::stage::get_stage,
            commands::stage::generate_stage,
            commands::stage::set_ask_count,
            commands::stage::restore_prior_ask_counts,
            // Invoice commands
            commands::invoice::get_invoice,
            commands::invoice::set_discount,
            commands::invoice::set_manual_total,
            commands::invoice::export_invoice_csv,
            // Workspace commands
            commands::workspace::save_workspace,
            commands::workspace::restore_workspace,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
