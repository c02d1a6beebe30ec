//! Row grouping with bottom-up aggregation.
//!
//! Leaves contribute their own values; each group merges the already
//! aggregated state of its immediate children, so multi-level grouping
//! composes without revisiting raw rows.

use std::collections::{BTreeMap, HashMap};

use log::debug;
use rust_decimal::prelude::*;

use crate::columns::{Aggregation, ColumnDef, ColumnSet, Row};
use crate::formatters::numeric_value;

/// Key shown for rows whose grouping field is missing or empty.
pub const BLANK_GROUP_KEY: &str = "(Blanks)";

/// Separator between breadcrumb levels.
pub const BREADCRUMB_SEPARATOR: &str = " › ";

/// Running sum and count of numeric leaf values.
///
/// A sum that leaves the `Decimal` range marks the state as overflowed; it
/// then has no result at this level or any level above it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggState {
    pub sum: Decimal,
    pub count: u64,
    pub overflowed: bool,
}

impl AggState {
    pub fn from_value(value: Option<f64>) -> Self {
        match value.and_then(Decimal::from_f64) {
            Some(sum) => Self {
                sum,
                count: 1,
                overflowed: false,
            },
            None => Self::default(),
        }
    }

    pub fn merge(&mut self, other: &AggState) {
        self.count += other.count;
        self.overflowed |= other.overflowed;
        if self.overflowed {
            return;
        }
        match self.sum.checked_add(other.sum) {
            Some(sum) => self.sum = sum,
            None => {
                debug!("Aggregate sum left the decimal range, dropping it");
                self.overflowed = true;
            }
        }
    }

    /// Final value, or `None` when no numeric values were folded in or the
    /// sum overflowed.
    pub fn result(&self, agg: Aggregation) -> Option<Decimal> {
        if self.count == 0 || self.overflowed {
            return None;
        }
        match agg {
            Aggregation::Sum => Some(self.sum),
            Aggregation::Avg => self.sum.checked_div(Decimal::from(self.count)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowNode {
    /// Index into the caller's row slice.
    Leaf(usize),
    Group(GroupNode),
}

impl RowNode {
    pub fn leaf_count(&self) -> usize {
        match self {
            RowNode::Leaf(_) => 1,
            RowNode::Group(group) => group.leaf_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode {
    pub field: String,
    pub key: String,
    /// Keys from the outermost group down to this one.
    pub path: Vec<String>,
    pub depth: usize,
    pub children: Vec<RowNode>,
    pub leaf_count: usize,
    states: BTreeMap<String, (Aggregation, AggState)>,
}

impl GroupNode {
    pub fn breadcrumb(&self) -> String {
        self.path.join(BREADCRUMB_SEPARATOR)
    }

    pub fn state(&self, field: &str) -> Option<&AggState> {
        self.states.get(field).map(|(_, state)| state)
    }

    /// Aggregated value of `field` for this group.
    pub fn aggregate(&self, field: &str) -> Option<Decimal> {
        self.states
            .get(field)
            .and_then(|(agg, state)| state.result(*agg))
    }

    pub fn aggregate_f64(&self, field: &str) -> Option<f64> {
        self.aggregate(field).and_then(|d| d.to_f64())
    }
}

/// Groups `rows` by the set's grouping columns in their natural order.
pub fn group_rows(rows: &[Row], set: &ColumnSet) -> Vec<RowNode> {
    let order: Vec<usize> = (0..rows.len()).collect();
    group_rows_in_order(rows, &order, set)
}

/// Groups the rows named by `order`. Keys appear in first-seen order.
///
/// Without grouping columns the result is a flat list of leaves.
pub fn group_rows_in_order(rows: &[Row], order: &[usize], set: &ColumnSet) -> Vec<RowNode> {
    let group_columns = set.group_columns();
    let aggregated: Vec<(&str, Aggregation)> = set
        .aggregated()
        .map(|(column, agg)| (column.field.as_str(), agg))
        .collect();
    build_level(rows, order, &group_columns, &aggregated, &[])
}

fn build_level(
    rows: &[Row],
    members: &[usize],
    group_columns: &[&ColumnDef],
    aggregated: &[(&str, Aggregation)],
    parent_path: &[String],
) -> Vec<RowNode> {
    let Some((column, deeper)) = group_columns.split_first() else {
        return members.iter().map(|&index| RowNode::Leaf(index)).collect();
    };

    let mut buckets: Vec<(String, Vec<usize>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for &index in members {
        let key = group_key(column, &rows[index]);
        match positions.get(&key) {
            Some(&slot) => buckets[slot].1.push(index),
            None => {
                positions.insert(key.clone(), buckets.len());
                buckets.push((key, vec![index]));
            }
        }
    }

    buckets
        .into_iter()
        .map(|(key, bucket)| {
            let mut path = parent_path.to_vec();
            path.push(key.clone());
            let children = build_level(rows, &bucket, deeper, aggregated, &path);
            let states = fold_children(rows, &children, aggregated);
            let leaf_count = children.iter().map(RowNode::leaf_count).sum();
            RowNode::Group(GroupNode {
                field: column.field.clone(),
                key,
                depth: parent_path.len(),
                path,
                children,
                leaf_count,
                states,
            })
        })
        .collect()
}

fn group_key(column: &ColumnDef, row: &Row) -> String {
    let key = column.format_cell(row);
    if key.is_empty() {
        BLANK_GROUP_KEY.to_string()
    } else {
        key
    }
}

/// Combines each child's contribution; groups contribute their stored state.
fn fold_children(
    rows: &[Row],
    children: &[RowNode],
    aggregated: &[(&str, Aggregation)],
) -> BTreeMap<String, (Aggregation, AggState)> {
    aggregated
        .iter()
        .map(|&(field, agg)| {
            let mut state = AggState::default();
            for child in children {
                match child {
                    RowNode::Leaf(index) => {
                        let value = rows[*index].get(field).and_then(numeric_value);
                        state.merge(&AggState::from_value(value));
                    }
                    RowNode::Group(group) => {
                        if let Some(child_state) = group.state(field) {
                            state.merge(child_state);
                        }
                    }
                }
            }
            (field.to_string(), (agg, state))
        })
        .collect()
}
