//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in ShopSync                               │
//! │                                                                         │
//! │  shopsync stock 5 --delta -3                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store fault? ────── DbError::QueryFailed("...") ──┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Bad input? ──────── ValidationError ──────────── ApiError ────►│  │
//! │  │         │                                          ▲            │  │
//! │  │         ▼                                          │            │  │
//! │  │  WriteOutcome::NotFound ───────────────────────────┘            │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  stderr: [NotFound] Product not found: 5          (exit code 1)       │
//! │  --json: {"code":"NOT_FOUND","message":"Product not found: 5"}        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopsync_core::{CoreError, ValidationError};
use shopsync_db::DbError;

/// API error returned from commands.
///
/// ## Serialization
/// This is what `--json` prints when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
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
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Database operation failed
    DatabaseError,

    /// The store was used before it was opened
    NotInitialized,

    /// The operation needs a signed-in user
    Unauthenticated,

    /// Internal error
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

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotInitialized => ApiError::new(
                ErrorCode::NotInitialized,
                "Database not initialized",
            ),
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::SchemaFailed(e) => {
                tracing::error!("Schema setup failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database setup failed")
            }
            DbError::SeedFailed(e) => {
                tracing::error!("Seeding failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database setup failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::NotSignedIn => ApiError::new(ErrorCode::Unauthenticated, "Not signed in"),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// A stored flag that no longer decodes, or output that can't be encoded.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(format!("Serialization failed: {}", err))
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
    fn test_db_errors_map_to_codes() {
        assert_eq!(ApiError::from(DbError::NotInitialized).code, ErrorCode::NotInitialized);
        assert_eq!(
            ApiError::from(DbError::QueryFailed("disk I/O error".into())).code,
            ErrorCode::DatabaseError
        );
    }

    #[test]
    fn test_query_failure_message_is_generic() {
        let err = ApiError::from(DbError::QueryFailed("no such table: products".into()));
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn test_core_errors_map_to_codes() {
        let err = ApiError::from(CoreError::ProductNotFound(42));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 42");

        assert_eq!(ApiError::from(CoreError::NotSignedIn).code, ErrorCode::Unauthenticated);
    }

    #[test]
    fn test_validation_error_keeps_message() {
        let err = ApiError::from(ValidationError::MustBePositive {
            field: "price".into(),
        });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("price"));
    }

    #[test]
    fn test_serializes_screaming_code() {
        let json = serde_json::to_string(&ApiError::not_found("Product", 7)).unwrap();
        assert_eq!(json, r#"{"code":"NOT_FOUND","message":"Product not found: 7"}"#);
    }
}
