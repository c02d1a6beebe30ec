//! Strategy positions grouped by book, then strategy within book.

use super::common::{
    bps_col, currency_col, group_key_col, integer_col, number_col, symbol_col, timestamp_col,
    toggle_col,
};
use super::{Aggregation, ColumnNode, ColumnSet};

pub const STRATEGY_POSITIONS_NAME: &str = "strategy-positions";

/// Handler name the caller registers to receive auto-hedge toggles.
pub const AUTO_HEDGE_HANDLER: &str = "auto-hedge";

const DELTA_DECIMALS: u32 = 2;
const DECAY_DECIMALS: u32 = 4;

/// Quantities and exposures sum across a group; rates and decay average.
pub fn strategy_positions() -> ColumnSet {
    ColumnSet::new(
        STRATEGY_POSITIONS_NAME,
        vec![
            group_key_col("Book", "book", 0).into(),
            group_key_col("Strategy", "strategy", 1).into(),
            symbol_col("Symbol", "symbol").into(),
            ColumnNode::group(
                "Position",
                vec![
                    integer_col("Net Position", "netPosition").aggregate(Aggregation::Sum),
                    currency_col("Exposure", "exposure").aggregate(Aggregation::Sum),
                    number_col("Delta", "delta", DELTA_DECIMALS).aggregate(Aggregation::Sum),
                ],
            ),
            ColumnNode::group(
                "P&L",
                vec![
                    currency_col("Carry P&L", "carryPnL").aggregate(Aggregation::Sum),
                    currency_col("Day P&L", "dayPnL").aggregate(Aggregation::Sum),
                ],
            ),
            ColumnNode::group(
                "Rates",
                vec![
                    bps_col("Funding (bps)", "fundingBps").aggregate(Aggregation::Avg),
                    number_col("Decay", "decay", DECAY_DECIMALS).aggregate(Aggregation::Avg),
                ],
            ),
            toggle_col("Auto Hedge", "autoHedge", AUTO_HEDGE_HANDLER, "symbol").into(),
            timestamp_col("Updated", "lastUpdated").into(),
        ],
    )
}
