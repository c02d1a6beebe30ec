//! SQLite storage for persisted UI preferences.

mod model;
mod repository;

pub use model::AppSettingDB;
pub use repository::SqlitePreferenceStore;

// Re-export trait from core for convenience
pub use deskgrid_core::theme::PreferenceStore;
