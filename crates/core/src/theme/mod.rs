//! Theme module - light/dark mode resolution, persistence and broadcast.

pub mod global;
mod preference_store;
mod theme_model;
mod theme_resolver;
mod theme_sources;

pub use preference_store::{InMemoryPreferenceStore, PreferenceStore};
pub use theme_model::*;
pub use theme_resolver::{ThemeResolver, ThemeSubscription};
pub use theme_sources::*;
