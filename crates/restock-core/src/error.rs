//! # Error Types
//!
//! Domain-specific error types for restock-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  restock-core errors (this file)                                        │
//! │  ├── CoreError        - State transition failures                       │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  restock-store errors (separate crate)                                  │
//! │  └── StoreError       - Persistence failures                            │
//! │                                                                         │
//! │  Shell errors (in app)                                                  │
//! │  └── ApiError         - What the frontend sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Numeric input coercion never produces an error: bad price and count
//! text degrades to 0 or to the cleaned numeric substring (see
//! [`crate::item`]). Errors here are reserved for addressing a row that
//! does not exist and for rejecting structurally invalid input.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// State transition errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No inventory row at the given position within a section.
    ///
    /// ## When This Occurs
    /// - The frontend addressed a row that was removed by an earlier edit
    /// - A section name no longer exists after an edit moved its last item
    #[error("No inventory item in section '{section}' at index {index}")]
    ItemNotFound { section: String, index: usize },

    /// No staged row at the given position.
    #[error("No staged item at index {index}")]
    StageIndexOutOfRange { index: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before a transition runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
