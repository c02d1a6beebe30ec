use std::fs;
use std::sync::Arc;

use anyhow::{bail, Context};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use deskgrid_core::columns::{ColumnCatalog, Row};
use deskgrid_core::grid::GridTemplate;
use deskgrid_core::theme::{self, PreferenceStore, ThemeMode, ThemeResolver};
use deskgrid_storage_sqlite::{db, SqlitePreferenceStore};

/// What the optional third argument asks of the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Set(ThemeMode),
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub column_set: String,
    pub rows_path: String,
    pub theme: Option<ThemeAction>,
}

impl Invocation {
    /// Parses `<column-set> <rows.json> [light|dark|toggle]`.
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let (Some(column_set), Some(rows_path)) = (args.next(), args.next()) else {
            bail!("{}", usage());
        };
        let theme = match args.next().as_deref() {
            None => None,
            Some("toggle") => Some(ThemeAction::Toggle),
            Some(raw) => Some(ThemeAction::Set(raw.parse()?)),
        };
        if let Some(extra) = args.next() {
            bail!("Unexpected argument '{}'\n{}", extra, usage());
        }
        Ok(Self {
            column_set,
            rows_path,
            theme,
        })
    }
}

pub fn usage() -> String {
    let sets: Vec<&str> = ColumnCatalog::standard().names().collect();
    format!(
        "usage: deskgrid-desk <column-set> <rows.json> [light|dark|toggle]\ncolumn sets: {}",
        sets.join(", ")
    )
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Opens the preference database and installs the process-wide resolver.
pub fn build_resolver(config: &Config) -> anyhow::Result<Arc<ThemeResolver>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let store: Arc<dyn PreferenceStore> = Arc::new(SqlitePreferenceStore::new(pool));
    let resolver = ThemeResolver::with_defaults(store);
    let mode = resolver.init();
    tracing::info!("Initial theme: {}", mode);
    Ok(theme::global::install(resolver))
}

pub fn load_rows(path: &str) -> anyhow::Result<Vec<Row>> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let rows: Vec<Row> =
        serde_json::from_str(&raw).with_context(|| format!("{} is not an array of objects", path))?;
    Ok(rows)
}

/// Renders the requested column set over the row snapshot.
pub fn render(
    invocation: &Invocation,
    config: &Config,
    resolver: &ThemeResolver,
) -> anyhow::Result<String> {
    let set = ColumnCatalog::standard().by_name(&invocation.column_set)?;
    let rows = load_rows(&invocation.rows_path)?;
    tracing::debug!("Loaded {} rows for {}", rows.len(), set.name);

    let template = GridTemplate::new(set, config.grid);
    let mut grid = template.instantiate(rows, resolver);

    match invocation.theme {
        Some(ThemeAction::Set(mode)) => resolver.apply(mode),
        Some(ThemeAction::Toggle) => {
            resolver.toggle();
        }
        None => {}
    }
    if grid.sync_theme() {
        tracing::info!("Grid switched to {}", grid.theme().class_name);
    }

    Ok(grid.render().to_text())
}
