//! Core error types for Deskgrid.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.
//! Formatters never produce errors; only lookups, handler dispatch and
//! persistence do.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the grid core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Preference store error: {0}")]
    Preference(String),

    #[error("Unknown column set: {0}")]
    UnknownColumnSet(String),

    #[error("Column set has no field '{0}'")]
    UnknownField(String),

    #[error("Column '{0}' is not sortable")]
    NotSortable(String),

    #[error("Column '{0}' is not filterable")]
    NotFilterable(String),

    #[error("Column '{0}' has no interactive control")]
    NotInteractive(String),

    #[error("No handler registered under '{0}'")]
    HandlerNotRegistered(String),

    #[error("Invalid theme mode: {0}")]
    InvalidThemeMode(String),

    #[error("Invalid grid density: {0}")]
    InvalidDensity(String),

    #[error("Row index {0} is out of range")]
    RowOutOfRange(usize),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// Uses `String` for all details so the storage layer can convert
/// Diesel/SQLite errors into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}
