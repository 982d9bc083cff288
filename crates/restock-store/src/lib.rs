//! # restock-store: Persistence Layer for Restock
//!
//! Keyed JSON snapshots in SQLite, the desktop stand-in for the keyed
//! persistent storage the browser version kept in `localStorage`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Restock Data Flow                                │
//! │                                                                         │
//! │  Shell command (save_workspace, restore_workspace, autosave)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  restock-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │   Snapshots   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ (snapshots.rs)│    │  (embedded)  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite: snapshots(key, payload, updated_at)                           │
//! │    key ∈ { inventory-data-v1, staged-items-v1, staged-history-v1 }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Degradation Contract
//! A missing key or a malformed payload loads as `None` ("no saved
//! data"); only real database failures surface as errors. Callers decide
//! whether `None` is silent (implicit startup load) or user-visible
//! (explicit restore).

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod snapshots;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{Database, DbConfig};
pub use snapshots::{keys, SnapshotRepository};
