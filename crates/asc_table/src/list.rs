//! List renderer: one header row and one row per record.

use crate::error::{Error, Result};
use crate::field::Field;
use crate::options::RenderOptions;
use crate::resolve::AttributeResolver;
use crate::sort::{resolve_sort, sort_rows, SortKey};
use crate::style::{colorize, header_cell};
use tracing::debug;

/// Where a list column takes its values from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSource {
    Field(&'static str),
    Tag(String),
}

/// One projected list column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub label: String,
    pub source: ColumnSource,
    /// Repeated values in this column are blanked when rendered.
    pub merge: bool,
}

impl Column {
    fn field(field: &Field) -> Self {
        Self {
            label: field.name.to_string(),
            source: ColumnSource::Field(field.name),
            merge: field.merge,
        }
    }

    fn tag(key: &str) -> Self {
        Self {
            label: format!("Tag: {key}"),
            source: ColumnSource::Tag(key.to_string()),
            merge: false,
        }
    }
}

/// A resolved, sorted, suppressed list table ready for layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    /// The ordering that was applied to `rows`.
    pub sort: Option<SortKey>,
}

impl ListTable {
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.label == label)
    }

    /// Values of the column labelled `label`, top to bottom.
    pub fn column_values(&self, label: &str) -> Option<Vec<&str>> {
        let index = self.column_index(label)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// Whether any column merges repeated values.
    pub fn is_grouped(&self) -> bool {
        self.columns.iter().any(|c| c.merge)
    }
}

/// Column projection: visible value fields in declared order, then one column per tag key.
fn project(fields: &[Field], tag_keys: &[String]) -> Vec<Column> {
    let mut columns: Vec<Column> = fields
        .iter()
        .filter(|f| f.visible && !f.section_header && !f.is_tags())
        .map(Column::field)
        .collect();

    let mut seen: Vec<&str> = Vec::new();
    for key in tag_keys {
        if seen.contains(&key.as_str()) {
            continue;
        }
        seen.push(key);
        columns.push(Column::tag(key));
    }
    columns
}

/// Field value, or its inline error marker when the field cannot be resolved.
fn field_value<R, A>(resolver: &A, name: &str, record: &R) -> Result<String>
where
    A: AttributeResolver<R> + ?Sized,
{
    match resolver.resolve(name, record) {
        Ok(value) => Ok(value),
        Err(e) if e.is_recoverable() => Ok(format!("[error: {e}]")),
        Err(e) => Err(e),
    }
}

fn resolve_cell<R, A>(resolver: &A, column: &Column, record: &R) -> Result<String>
where
    A: AttributeResolver<R> + ?Sized,
{
    match &column.source {
        ColumnSource::Field(name) => field_value(resolver, name, record),
        ColumnSource::Tag(key) => resolver.resolve_tag(key, record),
    }
}

/// Resolve every cell, sort the rows and drop columns with no values.
pub fn build_list<R, A>(
    fields: &[Field],
    records: &[R],
    resolver: &A,
    opts: &RenderOptions,
) -> Result<ListTable>
where
    A: AttributeResolver<R> + ?Sized,
{
    if fields.is_empty() {
        return Err(Error::NoFieldsDefined);
    }
    let mut columns = project(fields, &opts.tag_keys);
    if columns.is_empty() {
        return Err(Error::NoHeadersDefined);
    }

    let sort = resolve_sort(fields, opts.reverse);
    let sort_column = sort.and_then(|key| {
        columns
            .iter()
            .position(|c| c.source == ColumnSource::Field(key.field))
    });

    let mut keyed: Vec<(String, Vec<String>)> = Vec::with_capacity(records.len());
    for record in records {
        let cells = columns
            .iter()
            .map(|column| resolve_cell(resolver, column, record))
            .collect::<Result<Vec<_>>>()?;
        let sort_value = match (sort, sort_column) {
            (_, Some(index)) => cells[index].clone(),
            (Some(key), None) => field_value(resolver, key.field, record)?,
            (None, None) => String::new(),
        };
        keyed.push((sort_value, cells));
    }

    if let Some(key) = sort {
        debug!(field = key.field, direction = %key.direction, "sorting list rows");
        sort_rows(&mut keyed, key.direction, |(value, _)| value.as_str());
    }
    let mut rows: Vec<Vec<String>> = keyed.into_iter().map(|(_, cells)| cells).collect();

    if !rows.is_empty() {
        let keep: Vec<bool> = (0..columns.len())
            .map(|i| rows.iter().any(|row| !row[i].is_empty()))
            .collect();
        if keep.contains(&false) {
            let dropped: Vec<&str> = columns
                .iter()
                .zip(&keep)
                .filter(|(_, keep)| !**keep)
                .map(|(c, _)| c.label.as_str())
                .collect();
            debug!(columns = ?dropped, "suppressing empty columns");

            columns = retain_flagged(columns, &keep);
            rows = rows
                .into_iter()
                .map(|row| retain_flagged(row, &keep))
                .collect();
        }
    }

    Ok(ListTable {
        columns,
        rows,
        sort,
    })
}

fn retain_flagged<T>(items: Vec<T>, keep: &[bool]) -> Vec<T> {
    items
        .into_iter()
        .zip(keep)
        .filter(|(_, keep)| **keep)
        .map(|(item, _)| item)
        .collect()
}

/// Lay a built list table out as text.
pub fn render_list_table(table: &ListTable, opts: &RenderOptions) -> String {
    let style = opts
        .style
        .unwrap_or_else(|| opts.mode.style(table.is_grouped()));
    let mut out = opts.table(style);
    out.set_header(
        table
            .columns
            .iter()
            .map(|c| header_cell(&style.header_label(&c.label))),
    );

    for (i, row) in table.rows.iter().enumerate() {
        let previous = i.checked_sub(1).map(|p| &table.rows[p]);
        out.add_row(row.iter().enumerate().map(|(c, value)| {
            let repeated = table.columns[c].merge
                && previous.is_some_and(|prev| prev[c] == *value);
            if repeated {
                colorize("")
            } else {
                colorize(value)
            }
        }));
    }
    opts.titled(out.to_string())
}

/// Build and lay out a list table in one step.
pub fn render_list<R, A>(
    fields: &[Field],
    records: &[R],
    resolver: &A,
    opts: &RenderOptions,
) -> Result<String>
where
    A: AttributeResolver<R> + ?Sized,
{
    let table = build_list(fields, records, resolver, opts)?;
    Ok(render_list_table(&table, opts))
}
