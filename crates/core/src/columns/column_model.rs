//! Column descriptors and column sets.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::formatters::{
    format_bps, format_currency, format_integer, format_number, format_timestamp, numeric_value,
};

/// One row record: open-keyed structured data owned by the caller.
pub type Row = Map<String, Value>;

/// How a field renders. The kind alone decides the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DisplayKind {
    Number { decimals: u32 },
    Integer,
    Bps,
    Currency,
    Timestamp,
    Text,
}

impl DisplayKind {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, DisplayKind::Text)
    }

    /// Formats a raw cell value.
    pub fn format(&self, value: Option<&Value>) -> String {
        match self {
            DisplayKind::Text => value.map(text_value).unwrap_or_default(),
            _ => self.format_numeric(value.and_then(numeric_value)),
        }
    }

    /// Formats an already-extracted number, e.g. a group aggregate.
    pub fn format_numeric(&self, value: Option<f64>) -> String {
        match self {
            DisplayKind::Number { decimals } => format_number(value, *decimals),
            DisplayKind::Integer => format_integer(value),
            DisplayKind::Bps => format_bps(value),
            DisplayKind::Currency => format_currency(value),
            DisplayKind::Timestamp => format_timestamp(value),
            DisplayKind::Text => value.map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

fn text_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Sum,
    Avg,
}

/// Pinning side. Only the leading edge is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pin {
    Leading,
}

/// Interactive cell behavior. Handlers are referenced by name and looked
/// up in a [`crate::grid::HandlerRegistry`] at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CellControl {
    #[serde(rename_all = "camelCase")]
    Toggle {
        handler: String,
        identity_field: String,
    },
}

/// Immutable description of how one field renders in a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub header: String,
    pub field: String,
    pub kind: DisplayKind,
    /// Position in the grouping hierarchy (0 = outermost).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_group: Option<u8>,
    #[serde(default)]
    pub hide: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agg: Option<Aggregation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<Pin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resizable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<CellControl>,
}

impl ColumnDef {
    pub fn new(header: &str, field: &str, kind: DisplayKind) -> Self {
        Self {
            header: header.to_string(),
            field: field.to_string(),
            kind,
            row_group: None,
            hide: false,
            agg: None,
            pinned: None,
            width: None,
            sortable: None,
            resizable: None,
            filter: None,
            control: None,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn pinned_leading(mut self) -> Self {
        self.pinned = Some(Pin::Leading);
        self
    }

    pub fn aggregate(mut self, agg: Aggregation) -> Self {
        self.agg = Some(agg);
        self
    }

    pub fn group_by(mut self, order: u8) -> Self {
        self.row_group = Some(order);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hide = true;
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = Some(false);
        self
    }

    pub fn not_filterable(mut self) -> Self {
        self.filter = Some(false);
        self
    }

    pub fn not_resizable(mut self) -> Self {
        self.resizable = Some(false);
        self
    }

    pub fn with_control(mut self, control: CellControl) -> Self {
        self.control = Some(control);
        self
    }

    pub fn value<'a>(&self, row: &'a Row) -> Option<&'a Value> {
        row.get(&self.field)
    }

    /// Display text for this column's cell in `row`.
    pub fn format_cell(&self, row: &Row) -> String {
        match (&self.control, self.value(row)) {
            (Some(CellControl::Toggle { .. }), value) => {
                let label = match value {
                    Some(Value::Bool(true)) => "ON",
                    _ => "OFF",
                };
                label.to_string()
            }
            (None, value) => self.kind.format(value),
        }
    }
}

/// A column or a header group of columns.
///
/// Groups are purely visual: leaf resolution and formatting are unaffected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnNode {
    Leaf(ColumnDef),
    Group {
        header: String,
        children: Vec<ColumnDef>,
    },
}

impl ColumnNode {
    pub fn group(header: &str, children: Vec<ColumnDef>) -> Self {
        ColumnNode::Group {
            header: header.to_string(),
            children,
        }
    }
}

impl From<ColumnDef> for ColumnNode {
    fn from(def: ColumnDef) -> Self {
        ColumnNode::Leaf(def)
    }
}

/// Named, ordered collection of columns for one presentation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSet {
    pub name: String,
    pub nodes: Vec<ColumnNode>,
}

impl ColumnSet {
    pub fn new(name: &str, nodes: Vec<ColumnNode>) -> Self {
        Self {
            name: name.to_string(),
            nodes,
        }
    }

    /// All leaf columns in display order.
    pub fn leaves(&self) -> impl Iterator<Item = &ColumnDef> {
        self.nodes.iter().flat_map(|node| match node {
            ColumnNode::Leaf(def) => std::slice::from_ref(def).iter(),
            ColumnNode::Group { children, .. } => children.iter(),
        })
    }

    pub fn visible_leaves(&self) -> impl Iterator<Item = &ColumnDef> {
        self.leaves().filter(|def| !def.hide)
    }

    /// Grouping columns ordered outermost first.
    pub fn group_columns(&self) -> Vec<&ColumnDef> {
        let mut columns: Vec<&ColumnDef> =
            self.leaves().filter(|def| def.row_group.is_some()).collect();
        columns.sort_by_key(|def| def.row_group);
        columns
    }

    pub fn is_grouped(&self) -> bool {
        self.leaves().any(|def| def.row_group.is_some())
    }

    pub fn aggregated(&self) -> impl Iterator<Item = (&ColumnDef, Aggregation)> {
        self.leaves()
            .filter_map(|def| def.agg.map(|agg| (def, agg)))
    }

    pub fn find(&self, field: &str) -> Option<&ColumnDef> {
        self.leaves().find(|def| def.field == field)
    }

    pub fn has_header_groups(&self) -> bool {
        self.nodes
            .iter()
            .any(|node| matches!(node, ColumnNode::Group { .. }))
    }

    /// Header group label for each visible leaf, in display order.
    pub fn visible_group_headers(&self) -> Vec<Option<&str>> {
        let mut headers = Vec::new();
        for node in &self.nodes {
            match node {
                ColumnNode::Leaf(def) if !def.hide => headers.push(None),
                ColumnNode::Leaf(_) => {}
                ColumnNode::Group { header, children } => {
                    for _ in children.iter().filter(|def| !def.hide) {
                        headers.push(Some(header.as_str()));
                    }
                }
            }
        }
        headers
    }
}
