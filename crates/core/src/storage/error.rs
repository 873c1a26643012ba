use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// This is a carrier for store-level faults, not a recovery layer: backends
/// map whatever their client raises into one of these variants and return it
/// unchanged to the caller. No retry, no default-value substitution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
