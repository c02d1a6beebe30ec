//! Grid module - presentation template, theming, grouping and cell handlers.

mod grid_model;
mod grid_template;
mod grid_theme;
pub mod grouping;
mod handlers;

pub use grid_model::*;
pub use grid_template::*;
pub use grid_theme::*;
pub use grouping::{group_rows, AggState, GroupNode, RowNode};
pub use handlers::{HandlerRegistry, ToggleHandler};
