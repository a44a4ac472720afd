//! Error handling and result types for the record store.
//!
//! Lookups that simply miss return `Option`; the error type is reserved for
//! the fallible `try_*` APIs, configuration problems, and invariant
//! violations found by validation.

use thiserror::Error;

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvlStoreError {
    /// No record matches the `(key, value)` pair.
    #[error("record ({key}, {value}) not found")]
    RecordNotFound { key: String, value: i32 },
    /// The record is already present and duplicates are rejected.
    #[error("record ({key}, {value}) already present")]
    DuplicateRecord { key: String, value: i32 },
    /// Internal data structure integrity violation.
    #[error("data integrity error: {0}")]
    DataIntegrityError(String),
    /// Invalid configuration supplied at construction.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl AvlStoreError {
    pub fn not_found(key: &str, value: i32) -> Self {
        Self::RecordNotFound {
            key: key.to_string(),
            value,
        }
    }

    pub fn duplicate(key: &str, value: i32) -> Self {
        Self::DuplicateRecord {
            key: key.to_string(),
            value,
        }
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create an InvalidConfig error naming the offending setting
    pub fn invalid_config(setting: &str, details: &str) -> Self {
        Self::InvalidConfig(format!("{} {}", setting, details))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound { .. })
    }

    pub fn is_integrity_error(&self) -> bool {
        matches!(self, Self::DataIntegrityError(_))
    }
}

/// Public result type for store operations that may fail
pub type StoreResult<T> = Result<T, AvlStoreError>;

/// Result type for record lookup operations
pub type KeyResult<T> = Result<T, AvlStoreError>;

/// Result type for mutating operations
pub type ModifyResult<T> = Result<T, AvlStoreError>;

/// Result type for construction
pub type InitResult<T> = Result<T, AvlStoreError>;

/// Result extension trait for attaching operation context
pub trait StoreResultExt<T> {
    /// Prefix integrity and config errors with `context`.
    fn with_context(self, context: &str) -> StoreResult<T>;

    /// Same as `with_context`, phrased as an operation name.
    fn with_operation(self, operation: &str) -> StoreResult<T>;
}

impl<T> StoreResultExt<T> for StoreResult<T> {
    fn with_context(self, context: &str) -> StoreResult<T> {
        self.map_err(|e| match e {
            AvlStoreError::DataIntegrityError(msg) => AvlStoreError::data_integrity(context, &msg),
            AvlStoreError::InvalidConfig(msg) => {
                AvlStoreError::InvalidConfig(format!("{}: {}", context, msg))
            }
            other => other,
        })
    }

    fn with_operation(self, operation: &str) -> StoreResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}
