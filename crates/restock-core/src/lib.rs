//! # restock-core: Pure Business Logic for Restock
//!
//! This crate is the heart of Restock. It contains the whole
//! inventory/stage/invoice state model as pure functions and types with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Restock Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Frontend (WebView)                         │   │
//! │  │    Inventory Table ──► Stage Table ──► Invoice View             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ IPC                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Shell Commands                               │   │
//! │  │    edit_item, generate_stage, set_ask_count, export_invoice     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ restock-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │ workbench │  │  invoice  │  │  export   │  │   │
//! │  │   │  items,   │  │  stage,   │  │  totals,  │  │  csv in/  │  │   │
//! │  │   │  sections │  │  history  │  │  discount │  │  csv out  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  restock-store (Persistence)                    │   │
//! │  │              SQLite keyed snapshots, migrations                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - Item types and input coercion
//! - [`money`] - Money in integer cents (no floating point!)
//! - [`inventory`] - Ordered, versioned inventory collection
//! - [`sections`] - Memoized section grouping
//! - [`history`] - Bounded ledger of staged-item snapshots
//! - [`invoice`] - Invoice derivation and discount math
//! - [`source`] - Source catalog CSV ingestion
//! - [`export`] - CSV export with legacy quoting rules
//! - [`workbench`] - The application state object and its transitions
//! - [`error`] - Domain error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod history;
pub mod inventory;
pub mod invoice;
pub mod item;
pub mod money;
pub mod sections;
pub mod source;
pub mod workbench;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use history::HistoryLedger;
pub use inventory::Inventory;
pub use invoice::{InvoiceRow, InvoiceSummary};
pub use item::{InventoryItem, ItemField, StagedItem};
pub use money::{DiscountRate, Money};
pub use sections::{Section, SectionView};
pub use workbench::Workbench;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of staged-item snapshots kept in the history ledger.
///
/// Oldest entries are evicted first once the cap is reached. The ledger
/// exists to support "restore the previous ask-count state", not a full
/// undo stack, so a short window is enough.
pub const HISTORY_CAPACITY: usize = 10;

/// Rounding step for the discounted invoice total, in cents.
///
/// The discounted total is always rounded UP to the next multiple of this
/// step ($5.00). Applies even at 0% discount.
pub const TOTAL_ROUNDING_STEP_CENTS: i64 = 500;
