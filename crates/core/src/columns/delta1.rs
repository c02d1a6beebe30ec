//! Delta-one desk column sets: cash/futures basis monitor and trade tape.

use super::common::{
    bps_col, currency_col, integer_col, number_col, price_col, symbol_col, text_col, timestamp_col,
};
use super::{ColumnNode, ColumnSet};

pub const BASIS_CORE_NAME: &str = "basis-monitor-core";
pub const BASIS_LIQUIDITY_NAME: &str = "basis-monitor-liquidity";
pub const TRADE_TAPE_NAME: &str = "trade-tape";

/// Implied repo is quoted to three places.
const REPO_DECIMALS: u32 = 3;

/// Quotes on both legs and the resulting basis.
pub fn basis_monitor_core() -> ColumnSet {
    ColumnSet::new(
        BASIS_CORE_NAME,
        vec![
            symbol_col("Symbol", "symbol").into(),
            ColumnNode::group(
                "Cash",
                vec![price_col("Bid", "cashBid"), price_col("Ask", "cashAsk")],
            ),
            ColumnNode::group(
                "Futures",
                vec![price_col("Bid", "futuresBid"), price_col("Ask", "futuresAsk")],
            ),
            ColumnNode::group(
                "Basis",
                vec![
                    bps_col("Basis (bps)", "basisBps"),
                    bps_col("Chg (bps)", "basisChangeBps"),
                    number_col("Implied Repo %", "impliedRepo", REPO_DECIMALS),
                ],
            ),
            currency_col("Notional", "notional").into(),
            timestamp_col("Updated", "lastUpdated").into(),
        ],
    )
}

/// Displayed depth on both legs.
pub fn basis_monitor_liquidity() -> ColumnSet {
    ColumnSet::new(
        BASIS_LIQUIDITY_NAME,
        vec![
            symbol_col("Symbol", "symbol").into(),
            ColumnNode::group(
                "Cash Depth",
                vec![
                    integer_col("Bid Size", "cashBidSize"),
                    integer_col("Ask Size", "cashAskSize"),
                ],
            ),
            ColumnNode::group(
                "Futures Depth",
                vec![
                    integer_col("Bid Size", "futuresBidSize"),
                    integer_col("Ask Size", "futuresAskSize"),
                ],
            ),
            price_col("Spread (bps)", "spreadBps").into(),
            currency_col("ADV", "adv").into(),
            timestamp_col("Updated", "lastUpdated").into(),
        ],
    )
}

pub fn trade_tape() -> ColumnSet {
    ColumnSet::new(
        TRADE_TAPE_NAME,
        vec![
            timestamp_col("Time", "time").pinned_leading().into(),
            symbol_col("Symbol", "symbol").into(),
            text_col("Side", "side").with_width(70).into(),
            integer_col("Qty", "quantity").into(),
            price_col("Price", "price").into(),
            currency_col("Notional", "notional").into(),
            text_col("Venue", "venue").into(),
            text_col("Strategy", "strategy").into(),
        ],
    )
}
