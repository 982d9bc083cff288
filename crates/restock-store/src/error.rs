//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! SQLite error (sqlx::Error)
//!      │
//!      ▼
//! StoreError (this module)
//!      │
//!      ▼
//! ApiError (in the shell), serialized for the frontend
//! ```
//!
//! Malformed snapshot payloads are NOT errors here: the snapshot
//! repository degrades them to "no saved data" (see
//! [`crate::snapshots`]). `Serialize` covers failures encoding a payload
//! on the way in.

use thiserror::Error;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database file could not be opened or created.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration run failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(#[from] sqlx::migrate::MigrateError),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// Snapshot payload could not be encoded.
    #[error("Snapshot encoding failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
