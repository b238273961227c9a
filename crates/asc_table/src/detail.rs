//! Detail renderer: one record split into category sections.
//!
//! Each section is laid out under one of three layouts. With `columns_per_row = C`:
//!
//! ```text
//! vertical        horizontal           grid
//! | L1 | V1 |     | L1 | L2 | L3 |     | L1 | V1 | L2 | V2 | L3 | V3 |
//! | L2 | V2 |     | V1 | V2 | V3 |     | L4 | V4 |    |    |    |    |
//! | L3 | V3 |     | L4 |    |    |
//! | L4 | V4 |     | V4 |    |    |
//! ```
//!
//! Partially filled groups are padded at the end with empty slots.

use crate::error::{Error, Result};
use crate::field::Field;
use crate::options::RenderOptions;
use crate::resolve::AttributeResolver;
use crate::style::{colorize, label_cell, TableStyle};
use comfy_table::{Cell, ColumnConstraint, Width};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Value shown for empty or unresolvable detail fields.
pub const PLACEHOLDER: &str = "-";

/// Upper bound on label/value slots per row in horizontal and grid layouts.
pub const MAX_COLUMNS_PER_ROW: usize = 64;

/// Spatial arrangement of label/value pairs within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    Vertical,
    #[default]
    Horizontal,
    Grid,
}

impl Layout {
    pub fn name(self) -> &'static str {
        match self {
            Layout::Vertical => "vertical",
            Layout::Horizontal => "horizontal",
            Layout::Grid => "grid",
        }
    }

    /// Table columns needed for `columns_per_row` slots; `None` on overflow.
    pub fn width(self, columns_per_row: usize) -> Option<usize> {
        match self {
            Layout::Vertical => Some(2),
            Layout::Horizontal => Some(columns_per_row),
            Layout::Grid => columns_per_row.checked_mul(2),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vertical" => Ok(Layout::Vertical),
            "horizontal" => Ok(Layout::Horizontal),
            "grid" => Ok(Layout::Grid),
            other => Err(Error::UnknownLayout(other.to_string())),
        }
    }
}

/// One slot of a detail row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailCell {
    Label(String),
    Value(String),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailRow {
    /// Full-width section or sub-section title.
    Title(String),
    Cells(Vec<DetailCell>),
}

/// A laid-out detail table. Every `Cells` row holds exactly `width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTable {
    pub layout: Layout,
    pub width: usize,
    pub rows: Vec<DetailRow>,
}

impl DetailTable {
    /// Rows that carry label/value cells, excluding titles.
    pub fn cell_rows(&self) -> impl Iterator<Item = &[DetailCell]> {
        self.rows.iter().filter_map(|row| match row {
            DetailRow::Cells(cells) => Some(cells.as_slice()),
            DetailRow::Title(_) => None,
        })
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(|row| match row {
            DetailRow::Title(title) => Some(title.as_str()),
            DetailRow::Cells(_) => None,
        })
    }

    /// Value displayed next to `label`, wherever the layout put it.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        match self.layout {
            Layout::Vertical | Layout::Grid => self.cell_rows().find_map(|cells| {
                cells.chunks(2).find_map(|pair| match pair {
                    [DetailCell::Label(l), DetailCell::Value(v)] if l == label => {
                        Some(v.as_str())
                    }
                    _ => None,
                })
            }),
            Layout::Horizontal => {
                let rows: Vec<&[DetailCell]> = self.cell_rows().collect();
                rows.windows(2).find_map(|pair| {
                    let column = pair[0]
                        .iter()
                        .position(|c| matches!(c, DetailCell::Label(l) if l == label))?;
                    match &pair[1][column] {
                        DetailCell::Value(v) => Some(v.as_str()),
                        _ => None,
                    }
                })
            }
        }
    }
}

enum Entry {
    Pair(String, String),
    Header(String),
}

/// Visible fields grouped by category, in first-seen category order.
fn sections(fields: &[Field]) -> Vec<(&'static str, Vec<&Field>)> {
    let mut sections: Vec<(&'static str, Vec<&Field>)> = Vec::new();
    for field in fields.iter().filter(|f| f.visible) {
        match sections.iter_mut().find(|(category, _)| *category == field.category) {
            Some((_, members)) => members.push(field),
            None => sections.push((field.category, vec![field])),
        }
    }
    sections
}

fn display_value(value: String) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value
    }
}

fn section_entries<R, A>(members: &[&Field], record: &R, resolver: &A) -> Result<Vec<Entry>>
where
    A: AttributeResolver<R> + ?Sized,
{
    let mut entries = Vec::new();
    for field in members {
        if field.section_header {
            entries.push(Entry::Header(field.name.to_string()));
        } else if field.is_tags() {
            for tag in resolver.tags(record)? {
                entries.push(Entry::Pair(tag.key, display_value(tag.value)));
            }
        } else {
            let value = match resolver.resolve(field.name, record) {
                Ok(value) => display_value(value),
                Err(e) if e.is_recoverable() => {
                    debug!(field = field.name, error = %e, "detail field unresolved");
                    PLACEHOLDER.to_string()
                }
                Err(e) => return Err(e),
            };
            entries.push(Entry::Pair(field.name.to_string(), value));
        }
    }
    Ok(entries)
}

struct Packer {
    layout: Layout,
    per_row: usize,
    width: usize,
    pending: Vec<(String, String)>,
    rows: Vec<DetailRow>,
}

impl Packer {
    fn push(&mut self, entry: Entry) {
        match entry {
            Entry::Header(title) => {
                self.flush();
                self.rows.push(DetailRow::Title(title));
            }
            Entry::Pair(label, value) => {
                if self.layout == Layout::Vertical {
                    self.rows.push(DetailRow::Cells(vec![
                        DetailCell::Label(label),
                        DetailCell::Value(value),
                    ]));
                } else {
                    self.pending.push((label, value));
                    if self.pending.len() == self.per_row {
                        self.flush();
                    }
                }
            }
        }
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let group = std::mem::take(&mut self.pending);
        match self.layout {
            Layout::Vertical => {}
            Layout::Horizontal => {
                let (labels, values): (Vec<_>, Vec<_>) = group
                    .into_iter()
                    .map(|(l, v)| (DetailCell::Label(l), DetailCell::Value(v)))
                    .unzip();
                let labels = self.pad(labels);
                let values = self.pad(values);
                self.rows.push(DetailRow::Cells(labels));
                self.rows.push(DetailRow::Cells(values));
            }
            Layout::Grid => {
                let cells = group
                    .into_iter()
                    .flat_map(|(l, v)| [DetailCell::Label(l), DetailCell::Value(v)])
                    .collect();
                let cells = self.pad(cells);
                self.rows.push(DetailRow::Cells(cells));
            }
        }
    }

    fn pad(&self, mut cells: Vec<DetailCell>) -> Vec<DetailCell> {
        cells.resize(self.width, DetailCell::Empty);
        cells
    }
}

/// Resolve and lay out every visible field of `record`.
pub fn build_detail<R, A>(
    fields: &[Field],
    record: &R,
    resolver: &A,
    opts: &RenderOptions,
) -> Result<DetailTable>
where
    A: AttributeResolver<R> + ?Sized,
{
    if fields.is_empty() {
        return Err(Error::NoFieldsDefined);
    }
    let layout = opts.layout;
    let per_row = opts.columns_per_row;
    if layout != Layout::Vertical && per_row == 0 {
        return Err(Error::ColumnsPerRowZero { layout });
    }
    let too_large = Error::ColumnsPerRowTooLarge {
        layout,
        columns: per_row,
        max: MAX_COLUMNS_PER_ROW,
    };
    if layout != Layout::Vertical && per_row > MAX_COLUMNS_PER_ROW {
        return Err(too_large);
    }
    let width = layout.width(per_row).ok_or(too_large)?;

    let mut packer = Packer {
        layout,
        per_row,
        width,
        pending: Vec::new(),
        rows: Vec::new(),
    };

    for (category, members) in sections(fields) {
        let entries = section_entries(&members, record, resolver)?;
        if !entries.iter().any(|e| matches!(e, Entry::Pair(..))) {
            debug!(section = category, "skipping empty section");
            continue;
        }
        if !category.is_empty() {
            packer.rows.push(DetailRow::Title(category.to_string()));
        }
        for entry in entries {
            packer.push(entry);
        }
        packer.flush();
    }

    if packer.rows.is_empty() {
        return Err(Error::NoHeadersDefined);
    }
    Ok(DetailTable {
        layout,
        width,
        rows: packer.rows,
    })
}

/// Lay a built detail table out as text.
pub fn render_detail_table(table: &DetailTable, opts: &RenderOptions) -> String {
    let style = opts.style.unwrap_or(TableStyle::Separated);
    let mut out = opts.table(style);

    for row in &table.rows {
        match row {
            DetailRow::Title(title) => {
                let mut cells = vec![label_cell(title)];
                cells.resize_with(table.width, || Cell::new(""));
                out.add_row(cells);
            }
            DetailRow::Cells(cells) => {
                out.add_row(cells.iter().map(|cell| match cell {
                    DetailCell::Label(label) => label_cell(label),
                    DetailCell::Value(value) => colorize(value),
                    DetailCell::Empty => Cell::new(""),
                }));
            }
        }
    }

    let constraint = match (opts.column_min_width, opts.column_max_width) {
        (Some(lower), Some(upper)) => Some(ColumnConstraint::Boundaries {
            lower: Width::Fixed(lower),
            upper: Width::Fixed(upper.max(lower)),
        }),
        (Some(lower), None) => Some(ColumnConstraint::LowerBoundary(Width::Fixed(lower))),
        (None, Some(upper)) => Some(ColumnConstraint::UpperBoundary(Width::Fixed(upper))),
        (None, None) => None,
    };
    if let Some(constraint) = constraint {
        for index in 0..table.width {
            if let Some(column) = out.column_mut(index) {
                column.set_constraint(constraint);
            }
        }
    }

    opts.titled(out.to_string())
}

/// Build and lay out a detail table in one step.
pub fn render_detail<R, A>(
    fields: &[Field],
    record: &R,
    resolver: &A,
    opts: &RenderOptions,
) -> Result<String>
where
    A: AttributeResolver<R> + ?Sized,
{
    let table = build_detail(fields, record, resolver, opts)?;
    Ok(render_detail_table(&table, opts))
}
