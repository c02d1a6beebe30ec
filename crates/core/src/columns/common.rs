//! Column factories shared by every column set.
//!
//! Each factory pins one display kind, so the same kind formats the same
//! way wherever it appears.

use super::{CellControl, ColumnDef, DisplayKind};
use crate::formatters::DEFAULT_DECIMALS;

pub const SYMBOL_WIDTH: u32 = 110;
pub const TIME_WIDTH: u32 = 90;
pub const TOGGLE_WIDTH: u32 = 100;

pub fn text_col(header: &str, field: &str) -> ColumnDef {
    ColumnDef::new(header, field, DisplayKind::Text)
}

/// Instrument symbol, pinned to the leading edge.
pub fn symbol_col(header: &str, field: &str) -> ColumnDef {
    text_col(header, field)
        .pinned_leading()
        .with_width(SYMBOL_WIDTH)
}

pub fn number_col(header: &str, field: &str, decimals: u32) -> ColumnDef {
    ColumnDef::new(header, field, DisplayKind::Number { decimals })
}

pub fn price_col(header: &str, field: &str) -> ColumnDef {
    number_col(header, field, DEFAULT_DECIMALS)
}

pub fn integer_col(header: &str, field: &str) -> ColumnDef {
    ColumnDef::new(header, field, DisplayKind::Integer)
}

pub fn bps_col(header: &str, field: &str) -> ColumnDef {
    ColumnDef::new(header, field, DisplayKind::Bps)
}

pub fn currency_col(header: &str, field: &str) -> ColumnDef {
    ColumnDef::new(header, field, DisplayKind::Currency)
}

pub fn timestamp_col(header: &str, field: &str) -> ColumnDef {
    ColumnDef::new(header, field, DisplayKind::Timestamp).with_width(TIME_WIDTH)
}

/// Hidden text column whose values form one level of row grouping.
pub fn group_key_col(header: &str, field: &str, order: u8) -> ColumnDef {
    text_col(header, field).group_by(order).hidden()
}

/// Boolean switch bound to a named handler. The handler receives the
/// row's `identity_field` value and the requested state.
pub fn toggle_col(header: &str, field: &str, handler: &str, identity_field: &str) -> ColumnDef {
    text_col(header, field)
        .with_width(TOGGLE_WIDTH)
        .not_sortable()
        .not_filterable()
        .with_control(CellControl::Toggle {
            handler: handler.to_string(),
            identity_field: identity_field.to_string(),
        })
}
