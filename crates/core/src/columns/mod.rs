//! Columns module - descriptors, factories and the named column sets.

mod catalog;
mod column_model;
pub mod common;
pub mod delta1;
pub mod strategy;

pub use catalog::{ColumnCatalog, ColumnSetId};
pub use column_model::*;

#[cfg(test)]
mod columns_tests;
