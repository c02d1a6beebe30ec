//! Grid sizing presets and default column behavior.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::columns::ColumnDef;
use crate::errors::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridDensity {
    #[default]
    Regular,
    Compact,
}

impl GridDensity {
    pub fn row_height(&self) -> u32 {
        match self {
            GridDensity::Regular => 32,
            GridDensity::Compact => 30,
        }
    }

    pub fn header_height(&self) -> u32 {
        self.row_height()
    }

    pub fn font_size(&self) -> u32 {
        match self {
            GridDensity::Regular => 12,
            GridDensity::Compact => 11,
        }
    }
}

impl FromStr for GridDensity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(GridDensity::Regular),
            "compact" => Ok(GridDensity::Compact),
            other => Err(Error::InvalidDensity(other.to_string())),
        }
    }
}

/// Per-instance sizing. Explicit heights win over the density preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub density: GridDensity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_height: Option<u32>,
}

impl GridOptions {
    pub fn compact() -> Self {
        Self {
            density: GridDensity::Compact,
            ..Self::default()
        }
    }

    pub fn with_row_height(mut self, height: u32) -> Self {
        self.row_height = Some(height);
        self
    }

    pub fn with_header_height(mut self, height: u32) -> Self {
        self.header_height = Some(height);
        self
    }

    pub fn effective_row_height(&self) -> u32 {
        self.row_height.unwrap_or_else(|| self.density.row_height())
    }

    pub fn effective_header_height(&self) -> u32 {
        self.header_height
            .unwrap_or_else(|| self.density.header_height())
    }

    pub fn font_size(&self) -> u32 {
        self.density.font_size()
    }
}

/// Baseline applied to every column unless the column overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefaults {
    pub sortable: bool,
    pub resizable: bool,
    pub filter: bool,
    pub font_size: u32,
    pub header_font_size: u32,
}

impl ColumnDefaults {
    pub fn for_options(options: &GridOptions) -> Self {
        Self {
            sortable: true,
            resizable: true,
            filter: true,
            font_size: options.font_size(),
            header_font_size: options.font_size(),
        }
    }
}

/// A column with the defaults merged in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveColumn {
    pub def: ColumnDef,
    pub sortable: bool,
    pub resizable: bool,
    pub filter: bool,
    pub font_size: u32,
}

impl EffectiveColumn {
    pub fn merge(def: &ColumnDef, defaults: &ColumnDefaults) -> Self {
        Self {
            sortable: def.sortable.unwrap_or(defaults.sortable),
            resizable: def.resizable.unwrap_or(defaults.resizable),
            filter: def.filter.unwrap_or(defaults.filter),
            font_size: defaults.font_size,
            def: def.clone(),
        }
    }

    pub fn field(&self) -> &str {
        &self.def.field
    }
}
