//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Restock                                │
//! │                                                                         │
//! │  Frontend                     Rust Backend                              │
//! │  ────────                     ────────────                              │
//! │                                                                         │
//! │  invoke('edit_item_field')                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command Function: Result<T, ApiError>                                  │
//! │         │                                                               │
//! │         ├── CoreError  (bad address, empty product) ──► ApiError        │
//! │         ├── StoreError (database failure)           ──► ApiError        │
//! │         └── Success ────────────────────────────────────────────►       │
//! │                                                                         │
//! │  catch (e) { e.code = "NOT_FOUND", e.message = "..." }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The error implements `Serialize`, so a failing command hands the
//! frontend a machine-readable `code` plus a human-readable `message`.

use serde::Serialize;

use restock_core::CoreError;
use restock_store::StoreError;

/// API error returned from shell commands.
///
/// ## Serialization
/// ```json
/// { "code": "NOT_FOUND", "message": "No inventory item in section 'Dairy' at index 4" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Addressed row does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Persistence operation failed
    StorageError,

    /// Explicit restore found nothing usable in storage
    NoSavedData,

    /// Anything unexpected
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a "nothing saved" error for explicit restores.
    pub fn no_saved_data() -> Self {
        ApiError::new(ErrorCode::NoSavedData, "No saved workspace data found")
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts domain errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::ItemNotFound { .. } | CoreError::StageIndexOutOfRange { .. } => {
                ApiError::new(ErrorCode::NotFound, err.to_string())
            }
            CoreError::Validation(_) => ApiError::validation(err.to_string()),
        }
    }
}

/// Converts persistence errors to API errors.
///
/// Query details are logged here and replaced by a generic message; the
/// frontend has no use for SQL error text.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "Storage operation failed");
        ApiError::new(ErrorCode::StorageError, "Storage operation failed")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::StageIndexOutOfRange { index: 3 }.into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("index 3"));

        let err: ApiError = CoreError::Validation(restock_core::ValidationError::Required {
            field: "product".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::no_saved_data();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NO_SAVED_DATA");
        assert!(json["message"].as_str().unwrap().contains("No saved"));
    }
}
