//! Error types for the shell.

use carpool_store::StoreError;

/// Result type for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;

/// Errors that can escape a command handler.
///
/// Argument parse failures are deliberately *not* represented here:
/// handlers recover from those locally (print the message, print the
/// usage, return to the prompt), so they never cross this boundary.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The storage layer failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Reading from or writing to the console failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
