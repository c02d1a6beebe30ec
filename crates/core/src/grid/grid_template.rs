//! Reusable grid wrapper: merges defaults, tracks the theme and renders rows.

use std::cmp::Ordering;

use log::debug;
use serde::Serialize;

use super::grouping::{group_rows_in_order, GroupNode, RowNode};
use super::{ColumnDefaults, EffectiveColumn, GridOptions, GridTheme, HandlerRegistry};
use crate::columns::{CellControl, ColumnDef, ColumnNode, ColumnSet, Pin, Row};
use crate::errors::{Error, Result};
use crate::formatters::numeric_value;
use crate::theme::{ThemeResolver, ThemeSubscription};

/// Header of the synthetic outline column shown for grouped sets.
pub const GROUP_COLUMN_HEADER: &str = "Group";

const COLUMN_GAP: &str = " | ";

/// Column set plus sizing, shared by every grid built from it.
#[derive(Debug, Clone)]
pub struct GridTemplate {
    set: ColumnSet,
    options: GridOptions,
    defaults: ColumnDefaults,
    columns: Vec<EffectiveColumn>,
}

impl GridTemplate {
    pub fn new(set: &ColumnSet, options: GridOptions) -> Self {
        let defaults = ColumnDefaults::for_options(&options);
        let columns = display_order(set)
            .into_iter()
            .map(|def| EffectiveColumn::merge(def, &defaults))
            .collect();
        Self {
            set: set.clone(),
            options,
            defaults,
            columns,
        }
    }

    pub fn column_set(&self) -> &ColumnSet {
        &self.set
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn defaults(&self) -> &ColumnDefaults {
        &self.defaults
    }

    /// Visible columns in display order, defaults merged.
    pub fn columns(&self) -> &[EffectiveColumn] {
        &self.columns
    }

    pub fn column(&self, field: &str) -> Option<&EffectiveColumn> {
        self.columns.iter().find(|column| column.field() == field)
    }

    /// Builds a live grid over a row snapshot, subscribed to `resolver`.
    pub fn instantiate(&self, rows: Vec<Row>, resolver: &ThemeResolver) -> GridInstance {
        let subscription = resolver.subscribe();
        let theme = GridTheme::resolve(subscription.mode(), &self.options);
        let mut instance = GridInstance {
            template: self.clone(),
            rows,
            order: Vec::new(),
            outline: Vec::new(),
            sort: None,
            filter: None,
            theme,
            subscription,
        };
        instance.rebuild();
        instance
    }
}

/// Pinned columns first, then the rest in declared order. Hidden columns drop out.
fn display_order(set: &ColumnSet) -> Vec<&ColumnDef> {
    let (pinned, rest): (Vec<&ColumnDef>, Vec<&ColumnDef>) = set
        .visible_leaves()
        .partition(|def| def.pinned == Some(Pin::Leading));
    pinned.into_iter().chain(rest).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SortState {
    field: String,
    descending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterState {
    field: String,
    needle: String,
}

/// One rendered grid. Dropping it ends its theme subscription.
pub struct GridInstance {
    template: GridTemplate,
    rows: Vec<Row>,
    order: Vec<usize>,
    outline: Vec<RowNode>,
    sort: Option<SortState>,
    filter: Option<FilterState>,
    theme: GridTheme,
    subscription: ThemeSubscription,
}

impl GridInstance {
    pub fn theme(&self) -> &GridTheme {
        &self.theme
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &[EffectiveColumn] {
        self.template.columns()
    }

    pub fn outline(&self) -> &[RowNode] {
        &self.outline
    }

    /// Indices of rows passing the filter, in sorted order.
    pub fn visible_rows(&self) -> &[usize] {
        &self.order
    }

    /// Applies any pending theme broadcasts. Returns true if the variant changed.
    pub fn sync_theme(&mut self) -> bool {
        let Some(mode) = self.subscription.poll() else {
            return false;
        };
        if mode == self.theme.mode {
            return false;
        }
        debug!(
            "Grid '{}' switching to {} theme",
            self.template.set.name, mode
        );
        self.theme = GridTheme::resolve(mode, &self.template.options);
        true
    }

    pub fn sort_by(&mut self, field: &str, descending: bool) -> Result<()> {
        let column = self
            .template
            .column(field)
            .ok_or_else(|| Error::UnknownField(field.to_string()))?;
        if !column.sortable {
            return Err(Error::NotSortable(field.to_string()));
        }
        self.sort = Some(SortState {
            field: field.to_string(),
            descending,
        });
        self.rebuild();
        Ok(())
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.rebuild();
    }

    /// Keeps rows whose formatted `field` contains `needle`, case-insensitively.
    pub fn filter_contains(&mut self, field: &str, needle: &str) -> Result<()> {
        let column = self
            .template
            .column(field)
            .ok_or_else(|| Error::UnknownField(field.to_string()))?;
        if !column.filter {
            return Err(Error::NotFilterable(field.to_string()));
        }
        self.filter = Some(FilterState {
            field: field.to_string(),
            needle: needle.to_lowercase(),
        });
        self.rebuild();
        Ok(())
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.rebuild();
    }

    /// Dispatches a toggle on `row_index` to the column's registered handler.
    ///
    /// Neither the row nor the descriptor changes; the handler owns the effect.
    pub fn toggle(
        &self,
        row_index: usize,
        field: &str,
        state: bool,
        registry: &HandlerRegistry,
    ) -> Result<()> {
        let row = self
            .rows
            .get(row_index)
            .ok_or(Error::RowOutOfRange(row_index))?;
        let column = self
            .template
            .set
            .find(field)
            .ok_or_else(|| Error::UnknownField(field.to_string()))?;
        let Some(CellControl::Toggle {
            handler,
            identity_field,
        }) = &column.control
        else {
            return Err(Error::NotInteractive(field.to_string()));
        };
        let identity = match row.get(identity_field) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        registry.invoke_toggle(handler, &identity, state)
    }

    fn rebuild(&mut self) {
        let mut order: Vec<usize> = (0..self.rows.len()).collect();

        if let Some(filter) = &self.filter {
            if let Some(column) = self.template.set.find(&filter.field) {
                order.retain(|&i| {
                    column
                        .format_cell(&self.rows[i])
                        .to_lowercase()
                        .contains(&filter.needle)
                });
            }
        }

        if let Some(sort) = &self.sort {
            if let Some(column) = self.template.set.find(&sort.field) {
                order.sort_by(|&a, &b| {
                    compare_cells(column, &self.rows[a], &self.rows[b], sort.descending)
                });
            }
        }

        self.outline = group_rows_in_order(&self.rows, &order, &self.template.set);
        self.order = order;
    }

    /// Applies pending theme broadcasts, then renders the current view.
    pub fn render(&mut self) -> RenderedGrid {
        self.sync_theme();
        let grouped = self.template.set.is_grouped();
        let columns = self.template.columns();

        let mut headers = Vec::with_capacity(columns.len() + 1);
        let mut numeric = Vec::with_capacity(columns.len() + 1);
        let mut group_labels: Vec<Option<String>> = Vec::with_capacity(columns.len() + 1);
        if grouped {
            headers.push(GROUP_COLUMN_HEADER.to_string());
            numeric.push(false);
            group_labels.push(None);
        }
        let parents = parent_headers(&self.template.set);
        for column in columns {
            headers.push(column.def.header.clone());
            numeric.push(column.def.kind.is_numeric() && column.def.control.is_none());
            group_labels.push(
                parents
                    .iter()
                    .find(|(field, _)| *field == column.field())
                    .and_then(|(_, header)| header.map(str::to_string)),
            );
        }

        let group_headers = self
            .template
            .set
            .has_header_groups()
            .then(|| merge_spans(group_labels));

        let mut lines = Vec::new();
        for node in &self.outline {
            self.render_node(node, grouped, &mut lines);
        }

        RenderedGrid {
            theme: self.theme.clone(),
            group_headers,
            headers,
            numeric,
            lines,
        }
    }

    fn render_node(&self, node: &RowNode, grouped: bool, lines: &mut Vec<RenderedRow>) {
        match node {
            RowNode::Leaf(index) => {
                let row = &self.rows[*index];
                let mut cells = Vec::with_capacity(self.columns().len() + 1);
                if grouped {
                    cells.push(String::new());
                }
                cells.extend(self.columns().iter().map(|c| c.def.format_cell(row)));
                lines.push(RenderedRow {
                    kind: RowKind::Leaf,
                    depth: self.template.set.group_columns().len(),
                    row_index: Some(*index),
                    cells,
                });
            }
            RowNode::Group(group) => {
                lines.push(self.render_group(group));
                for child in &group.children {
                    self.render_node(child, grouped, lines);
                }
            }
        }
    }

    fn render_group(&self, group: &GroupNode) -> RenderedRow {
        let mut cells = Vec::with_capacity(self.columns().len() + 1);
        cells.push(format!("{} ({})", group.breadcrumb(), group.leaf_count));
        cells.extend(self.columns().iter().map(|column| match column.def.agg {
            Some(_) => column
                .def
                .kind
                .format_numeric(group.aggregate_f64(column.field())),
            None => String::new(),
        }));
        RenderedRow {
            kind: RowKind::Group,
            depth: group.depth,
            row_index: None,
            cells,
        }
    }
}

/// (field, enclosing header group) for every leaf.
fn parent_headers(set: &ColumnSet) -> Vec<(&str, Option<&str>)> {
    set.nodes
        .iter()
        .flat_map(|node| match node {
            ColumnNode::Leaf(def) => vec![(def.field.as_str(), None)],
            ColumnNode::Group { header, children } => children
                .iter()
                .map(|def| (def.field.as_str(), Some(header.as_str())))
                .collect(),
        })
        .collect()
}

fn merge_spans(labels: Vec<Option<String>>) -> Vec<HeaderSpan> {
    let mut spans: Vec<HeaderSpan> = Vec::new();
    for label in labels {
        let label = label.unwrap_or_default();
        match spans.last_mut() {
            Some(last) if last.label == label => last.span += 1,
            _ => spans.push(HeaderSpan { label, span: 1 }),
        }
    }
    spans
}

/// Blank numeric cells sort last in both directions.
fn compare_cells(column: &ColumnDef, a: &Row, b: &Row, descending: bool) -> Ordering {
    let ordering = if column.kind.is_numeric() {
        let x = column.value(a).and_then(numeric_value);
        let y = column.value(b).and_then(numeric_value);
        match (x, y) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    } else {
        column.format_cell(a).cmp(&column.format_cell(b))
    };
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSpan {
    pub label: String,
    pub span: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Group,
    Leaf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedRow {
    pub kind: RowKind,
    pub depth: usize,
    pub row_index: Option<usize>,
    pub cells: Vec<String>,
}

/// Fully formatted grid, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedGrid {
    pub theme: GridTheme,
    pub group_headers: Option<Vec<HeaderSpan>>,
    pub headers: Vec<String>,
    /// Right-align flags per column.
    pub numeric: Vec<bool>,
    pub lines: Vec<RenderedRow>,
}

impl RenderedGrid {
    /// Plain-text table. Numeric columns are right-aligned.
    pub fn to_text(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for line in &self.lines {
            for (i, cell) in line.cells.iter().enumerate() {
                let indent = indent_for(line, i);
                widths[i] = widths[i].max(cell.chars().count() + indent);
            }
        }

        let mut out = String::new();
        if let Some(spans) = &self.group_headers {
            let mut col = 0;
            let mut parts = Vec::with_capacity(spans.len());
            for span in spans {
                let width: usize = widths[col..col + span.span].iter().sum::<usize>()
                    + COLUMN_GAP.len() * (span.span - 1);
                parts.push(pad(&span.label, width, false));
                col += span.span;
            }
            out.push_str(parts.join(COLUMN_GAP).trim_end());
            out.push('\n');
        }

        let header: Vec<String> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| pad(h, widths[i], self.numeric[i]))
            .collect();
        out.push_str(header.join(COLUMN_GAP).trim_end());
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');

        for line in &self.lines {
            let cells: Vec<String> = line
                .cells
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let indented = format!("{}{}", " ".repeat(indent_for(line, i)), cell);
                    pad(&indented, widths[i], self.numeric[i])
                })
                .collect();
            out.push_str(cells.join(COLUMN_GAP).trim_end());
            out.push('\n');
        }
        out
    }
}

/// Group rows indent their outline cell by depth.
fn indent_for(line: &RenderedRow, column: usize) -> usize {
    match (line.kind, column) {
        (RowKind::Group, 0) => line.depth * 2,
        _ => 0,
    }
}

fn pad(text: &str, width: usize, right: bool) -> String {
    if right {
        format!("{:>width$}", text, width = width)
    } else {
        format!("{:<width$}", text, width = width)
    }
}
