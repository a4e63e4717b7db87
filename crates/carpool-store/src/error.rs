//! Error types for carpool storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying SQLite operation failed.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
