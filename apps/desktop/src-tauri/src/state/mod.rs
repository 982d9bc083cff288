//! # State Module
//!
//! Manages application state for the desktop shell.
//!
//! ## Multiple State Types
//! Instead of a single `AppState` struct containing everything, separate
//! state types are registered individually:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────────┐      │
//! │  │   DbState    │  │ WorkbenchState   │  │    ConfigState       │      │
//! │  │              │  │                  │  │                      │      │
//! │  │  Database    │  │  Arc<Mutex<      │  │  source path         │      │
//! │  │  (SQLite     │  │    Workbench     │  │  db path             │      │
//! │  │   pool)      │  │  >>              │  │  default discount    │      │
//! │  └──────────────┘  └──────────────────┘  └──────────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                         │
//! │  • DbState: internal connection pool (thread-safe)                      │
//! │  • WorkbenchState: protected by Arc<Mutex<T>> for exclusive access      │
//! │  • ConfigState: read-only after initialization                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands declare exactly the state they need.

mod config;
mod db;
mod workbench;

pub use config::ConfigState;
pub use db::DbState;
pub use workbench::{
    autosave_inventory, autosave_stage, load_initial_workbench, load_source_items,
    reset_from_source, restore_workspace, save_workspace, section_groups, SectionGroup,
    WorkbenchState,
};
