//! Immutable per-call render configuration.

use crate::detail::Layout;
use crate::style::{OutputMode, TableStyle};
use comfy_table::{ContentArrangement, Table};

/// Everything a renderer needs besides fields and records.
///
/// Built once by the caller and passed by reference into every render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Line printed above the table.
    pub title: Option<String>,
    /// Explicit box style. `None` lets the renderer choose from `mode`.
    pub style: Option<TableStyle>,
    pub mode: OutputMode,
    /// Flip the resolved sort direction.
    pub reverse: bool,
    /// Tag keys expanded into `Tag: <key>` list columns.
    pub tag_keys: Vec<String>,
    /// Emit ANSI colors for status values.
    pub color: bool,
    /// Wrap content to fit this many terminal columns.
    pub max_width: Option<u16>,
    pub layout: Layout,
    pub columns_per_row: usize,
    pub column_min_width: Option<u16>,
    pub column_max_width: Option<u16>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: None,
            style: None,
            mode: OutputMode::Table,
            reverse: false,
            tag_keys: Vec::new(),
            color: false,
            max_width: None,
            layout: Layout::Horizontal,
            columns_per_row: 3,
            column_min_width: None,
            column_max_width: None,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>) -> Self {
        self.tag_keys.push(key.into());
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_max_width(mut self, width: u16) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_layout(mut self, layout: Layout, columns_per_row: usize) -> Self {
        self.layout = layout;
        self.columns_per_row = columns_per_row;
        self
    }

    pub fn with_column_width(mut self, min: Option<u16>, max: Option<u16>) -> Self {
        self.column_min_width = min;
        self.column_max_width = max;
        self
    }

    /// Fresh table with style, color and width policy applied.
    pub(crate) fn table(&self, style: TableStyle) -> Table {
        let mut table = Table::new();
        style.apply(&mut table);
        if self.color {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        match self.max_width {
            Some(width) => {
                table
                    .set_content_arrangement(ContentArrangement::Dynamic)
                    .set_width(width);
            }
            None => {
                table.set_content_arrangement(ContentArrangement::Disabled);
            }
        }
        table
    }

    /// Prefix `body` with the title line, if any.
    pub(crate) fn titled(&self, body: String) -> String {
        let mut out = String::new();
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            out.push_str(title);
            out.push('\n');
        }
        out.push_str(&body);
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}
