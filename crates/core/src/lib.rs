//! Deskgrid Core - column definitions, formatters and theme state.
//!
//! This crate turns caller-owned row records into typed, formatted and
//! aggregatable grid columns. It is storage-agnostic: the theme preference
//! is persisted through the `PreferenceStore` trait, implemented by the
//! `storage-sqlite` crate.

pub mod columns;
pub mod errors;
pub mod formatters;
pub mod grid;
pub mod theme;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
