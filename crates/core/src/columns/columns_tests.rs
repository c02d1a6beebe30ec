//! Tests for column descriptors and column sets.

use serde_json::json;

use super::common::*;
use super::*;

fn row(value: serde_json::Value) -> Row {
    value.as_object().cloned().expect("object literal")
}

// ==================== Display Kinds ====================

#[test]
fn test_kind_decides_formatting_across_sets() {
    let core = ColumnSetId::BasisMonitorCore.build();
    let positions = ColumnSetId::StrategyPositions.build();

    let basis = core.find("basisBps").unwrap();
    let funding = positions.find("fundingBps").unwrap();
    assert_eq!(basis.kind, DisplayKind::Bps);
    assert_eq!(funding.kind, DisplayKind::Bps);

    let sample = row(json!({ "basisBps": 3.2, "fundingBps": 3.2 }));
    assert_eq!(basis.format_cell(&sample), "+3.20");
    assert_eq!(funding.format_cell(&sample), "+3.20");
}

#[test]
fn test_text_kind_renders_scalars() {
    let column = text_col("Venue", "venue");
    assert_eq!(column.format_cell(&row(json!({ "venue": "XEUR" }))), "XEUR");
    assert_eq!(column.format_cell(&row(json!({ "venue": 7 }))), "7");
    assert_eq!(column.format_cell(&row(json!({ "venue": null }))), "");
    assert_eq!(column.format_cell(&row(json!({}))), "");
}

#[test]
fn test_missing_numeric_field_renders_empty() {
    let column = currency_col("Notional", "notional");
    assert_eq!(column.format_cell(&row(json!({ "symbol": "ES" }))), "");
    assert_eq!(column.format_cell(&row(json!({ "notional": 0 }))), "$0");
}

#[test]
fn test_toggle_cell_renders_state() {
    let column = toggle_col("Auto Hedge", "autoHedge", "auto-hedge", "symbol");
    assert_eq!(column.format_cell(&row(json!({ "autoHedge": true }))), "ON");
    assert_eq!(column.format_cell(&row(json!({ "autoHedge": false }))), "OFF");
    assert_eq!(column.format_cell(&row(json!({}))), "OFF");
}

// ==================== Factories ====================

#[test]
fn test_factories_are_behaviorally_equivalent() {
    assert_eq!(ColumnSetId::StrategyPositions.build(), ColumnSetId::StrategyPositions.build());

    let a = bps_col("Basis", "basisBps");
    let b = bps_col("Basis", "basisBps");
    let sample = row(json!({ "basisBps": -0.75 }));
    assert_eq!(a.header, b.header);
    assert_eq!(a.field, b.field);
    assert_eq!(a.format_cell(&sample), b.format_cell(&sample));
}

#[test]
fn test_symbol_col_is_pinned() {
    let column = symbol_col("Symbol", "symbol");
    assert_eq!(column.pinned, Some(Pin::Leading));
    assert_eq!(column.width, Some(SYMBOL_WIDTH));
}

#[test]
fn test_group_key_col_is_hidden_grouping_column() {
    let column = group_key_col("Book", "book", 0);
    assert!(column.hide);
    assert_eq!(column.row_group, Some(0));
}

// ==================== Column Sets ====================

#[test]
fn test_header_groups_do_not_change_leaves() {
    let set = ColumnSetId::BasisMonitorCore.build();
    let fields: Vec<&str> = set.leaves().map(|c| c.field.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "symbol",
            "cashBid",
            "cashAsk",
            "futuresBid",
            "futuresAsk",
            "basisBps",
            "basisChangeBps",
            "impliedRepo",
            "notional",
            "lastUpdated",
        ]
    );
    assert!(set.has_header_groups());

    let flat = cash_bid_outside_group();
    let sample = row(json!({ "cashBid": 101.256 }));
    assert_eq!(
        set.find("cashBid").unwrap().format_cell(&sample),
        flat.format_cell(&sample)
    );
}

fn cash_bid_outside_group() -> ColumnDef {
    price_col("Bid", "cashBid")
}

#[test]
fn test_strategy_positions_grouping_and_aggregation() {
    let set = ColumnSetId::StrategyPositions.build();
    let groups: Vec<&str> = set.group_columns().iter().map(|c| c.field.as_str()).collect();
    assert_eq!(groups, vec!["book", "strategy"]);

    let aggs: Vec<(&str, Aggregation)> = set
        .aggregated()
        .map(|(c, agg)| (c.field.as_str(), agg))
        .collect();
    assert!(aggs.contains(&("netPosition", Aggregation::Sum)));
    assert!(aggs.contains(&("carryPnL", Aggregation::Sum)));
    assert!(aggs.contains(&("fundingBps", Aggregation::Avg)));
    assert!(aggs.contains(&("decay", Aggregation::Avg)));

    assert!(set.visible_leaves().all(|c| c.field != "book" && c.field != "strategy"));
}

#[test]
fn test_visible_group_headers_align_with_visible_leaves() {
    let set = ColumnSetId::StrategyPositions.build();
    let headers = set.visible_group_headers();
    assert_eq!(headers.len(), set.visible_leaves().count());
    assert_eq!(headers[0], None);
    assert_eq!(headers[1], Some("Position"));
}

#[test]
fn test_column_set_serializes_for_js_grid() {
    let set = ColumnSetId::StrategyPositions.build();
    let value = serde_json::to_value(&set).unwrap();

    assert_eq!(value["name"], "strategy-positions");
    assert_eq!(value["nodes"][0]["rowGroup"], 0);
    assert_eq!(value["nodes"][0]["hide"], true);
    assert_eq!(value["nodes"][3]["header"], "Position");
    assert_eq!(value["nodes"][3]["children"][0]["agg"], "sum");

    let toggle = set.find("autoHedge").unwrap();
    let toggle_json = serde_json::to_value(toggle).unwrap();
    assert_eq!(toggle_json["control"]["type"], "toggle");
    assert_eq!(toggle_json["control"]["identityField"], "symbol");

    let back: ColumnSet = serde_json::from_value(value).unwrap();
    assert_eq!(back, set);
}

// ==================== Catalog ====================

#[test]
fn test_catalog_lookup() {
    let catalog = ColumnCatalog::standard();
    assert_eq!(catalog.by_name("trade-tape").unwrap().name, "trade-tape");
    assert_eq!(
        catalog.get(ColumnSetId::BasisMonitorLiquidity).name,
        "basis-monitor-liquidity"
    );
    assert!(matches!(
        catalog.by_name("alerts"),
        Err(crate::errors::Error::UnknownColumnSet(_))
    ));
    assert_eq!(catalog.names().count(), ColumnSetId::ALL.len());
}
