//! Named column sets, built once and selected by id or name.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{delta1, strategy, ColumnSet};
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnSetId {
    BasisMonitorCore,
    BasisMonitorLiquidity,
    StrategyPositions,
    TradeTape,
}

impl ColumnSetId {
    pub const ALL: [ColumnSetId; 4] = [
        ColumnSetId::BasisMonitorCore,
        ColumnSetId::BasisMonitorLiquidity,
        ColumnSetId::StrategyPositions,
        ColumnSetId::TradeTape,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnSetId::BasisMonitorCore => delta1::BASIS_CORE_NAME,
            ColumnSetId::BasisMonitorLiquidity => delta1::BASIS_LIQUIDITY_NAME,
            ColumnSetId::StrategyPositions => strategy::STRATEGY_POSITIONS_NAME,
            ColumnSetId::TradeTape => delta1::TRADE_TAPE_NAME,
        }
    }

    /// Builds a fresh copy of the set.
    pub fn build(&self) -> ColumnSet {
        match self {
            ColumnSetId::BasisMonitorCore => delta1::basis_monitor_core(),
            ColumnSetId::BasisMonitorLiquidity => delta1::basis_monitor_liquidity(),
            ColumnSetId::StrategyPositions => strategy::strategy_positions(),
            ColumnSetId::TradeTape => delta1::trade_tape(),
        }
    }
}

impl fmt::Display for ColumnSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnSetId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ColumnSetId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownColumnSet(s.to_string()))
    }
}

/// Immutable registry of every column set.
pub struct ColumnCatalog {
    sets: HashMap<ColumnSetId, ColumnSet>,
}

static STANDARD: Lazy<ColumnCatalog> = Lazy::new(ColumnCatalog::build);

impl ColumnCatalog {
    fn build() -> Self {
        Self {
            sets: ColumnSetId::ALL.into_iter().map(|id| (id, id.build())).collect(),
        }
    }

    /// The process-wide catalog, built on first access.
    pub fn standard() -> &'static ColumnCatalog {
        &STANDARD
    }

    pub fn get(&self, id: ColumnSetId) -> &ColumnSet {
        // Every id is inserted by `build`.
        &self.sets[&id]
    }

    pub fn by_name(&self, name: &str) -> Result<&ColumnSet> {
        let id: ColumnSetId = name.parse()?;
        Ok(self.get(id))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        ColumnSetId::ALL.into_iter().map(|id| id.as_str())
    }
}
