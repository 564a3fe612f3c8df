//! Database error types.

use thiserror::Error;

/// Database error type.
///
/// Only construction paths return these: opening a connection, applying the
/// decryption key, configuring pragmas, and preparing a statement. Everything
/// past that point reports failure through a `bool` or an empty row set.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection setup error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Invalid caller input (empty path, empty passphrase, empty SQL)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using DatabaseError.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
