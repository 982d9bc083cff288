//! # Database State
//!
//! Wraps the `Database` connection for use in shell commands.
//!
//! ## Thread Safety
//! The `Database` struct from `restock-store` contains a `SqlitePool`
//! which is inherently thread-safe. Multiple commands can run queries
//! concurrently without explicit locking.

use restock_store::Database;

/// Wrapper around `Database` for shell state management.
#[derive(Debug)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
