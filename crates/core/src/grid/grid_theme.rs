//! Visual variants for grids.

use serde::Serialize;

use super::GridOptions;
use crate::theme::ThemeMode;

/// Grid colors as CSS hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPalette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub header_background: &'static str,
    pub header_foreground: &'static str,
    pub border: &'static str,
    pub row_hover: &'static str,
    pub group_row_background: &'static str,
    pub accent: &'static str,
    pub positive: &'static str,
    pub negative: &'static str,
}

impl GridPalette {
    pub fn light() -> Self {
        Self {
            background: "#ffffff",
            foreground: "#1a1f2b",
            header_background: "#f3f5f8",
            header_foreground: "#3b4457",
            border: "#d9dee7",
            row_hover: "#eef2f7",
            group_row_background: "#f7f9fb",
            accent: "#0b6fd6",
            positive: "#1f8a5b",
            negative: "#d2392b",
        }
    }

    /// Dark palette tuned for dense numeric tables.
    pub fn dark() -> Self {
        Self {
            background: "#121620",
            foreground: "#f5f6f8",
            header_background: "#1a1f2b",
            header_foreground: "#c5cad3",
            border: "#2b3242",
            row_hover: "#222938",
            group_row_background: "#171c27",
            accent: "#3d9bf5",
            positive: "#23c07a",
            negative: "#e5554a",
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Resolved look of one grid instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridTheme {
    pub mode: ThemeMode,
    pub class_name: &'static str,
    pub palette: GridPalette,
    pub row_height: u32,
    pub header_height: u32,
    pub font_size: u32,
}

impl GridTheme {
    pub fn resolve(mode: ThemeMode, options: &GridOptions) -> Self {
        let class_name = match mode {
            ThemeMode::Light => "desk-grid-light",
            ThemeMode::Dark => "desk-grid-dark",
        };
        Self {
            mode,
            class_name,
            palette: GridPalette::for_mode(mode),
            row_height: options.effective_row_height(),
            header_height: options.effective_header_height(),
            font_size: options.font_size(),
        }
    }
}
