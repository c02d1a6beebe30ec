use anyhow::Context;
use deskgrid_core::grid::{GridDensity, GridOptions};

pub struct Config {
    pub db_path: String,
    pub grid: GridOptions,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// `DESK_THEME` is not read here; the theme resolver consults it directly.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let db_path = lookup("DESK_DB_PATH").unwrap_or_else(|| "./db/desk.db".into());
        let density: GridDensity = match lookup("DESK_DENSITY") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid DESK_DENSITY '{}'", raw))?,
            None => GridDensity::default(),
        };

        let mut grid = GridOptions {
            density,
            ..GridOptions::default()
        };
        if let Some(height) = parse_height(&lookup, "DESK_ROW_HEIGHT")? {
            grid = grid.with_row_height(height);
        }
        if let Some(height) = parse_height(&lookup, "DESK_HEADER_HEIGHT")? {
            grid = grid.with_header_height(height);
        }

        let log_format = lookup("DESK_LOG_FORMAT").unwrap_or_else(|| "text".into());
        Ok(Self {
            db_path,
            grid,
            log_format,
        })
    }
}

fn parse_height(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<u32>> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid {} '{}'", key, raw))
        })
        .transpose()
}
