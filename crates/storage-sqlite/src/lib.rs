//! SQLite storage implementation for Deskgrid.
//!
//! This crate owns every Diesel dependency in the workspace. It provides:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - A durable `PreferenceStore` backed by the `app_settings` table
//!
//! # Architecture
//!
//! ```text
//!   core (columns, grid, theme)
//!              │
//!              │ PreferenceStore
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod settings;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use settings::SqlitePreferenceStore;

// Re-export from deskgrid-core for convenience
pub use deskgrid_core::errors::{DatabaseError, Error, Result};
