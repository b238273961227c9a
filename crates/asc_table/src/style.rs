//! Box styles, output modes and status coloring.

use crate::error::Error;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{NOTHING, UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, Color, Table};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Box-drawing style of a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TableStyle {
    /// No borders; upper-cased headers. Suited to piping into other tools.
    Plain,
    /// Rounded outer border, no rules between body rows.
    #[default]
    Rounded,
    /// Rounded outer border with a rule between every row.
    Separated,
}

impl TableStyle {
    pub const ALL: [TableStyle; 3] = [TableStyle::Plain, TableStyle::Rounded, TableStyle::Separated];

    pub fn name(self) -> &'static str {
        match self {
            TableStyle::Plain => "plain",
            TableStyle::Rounded => "rounded",
            TableStyle::Separated => "separated",
        }
    }

    /// Apply borders to `table`.
    pub fn apply(self, table: &mut Table) {
        match self {
            TableStyle::Plain => {
                table.load_preset(NOTHING);
            }
            TableStyle::Rounded => {
                table
                    .load_preset(UTF8_FULL_CONDENSED)
                    .apply_modifier(UTF8_ROUND_CORNERS);
            }
            TableStyle::Separated => {
                table
                    .load_preset(UTF8_FULL)
                    .apply_modifier(UTF8_ROUND_CORNERS);
            }
        }
    }

    /// Header text as this style displays it.
    pub fn header_label(self, label: &str) -> String {
        match self {
            TableStyle::Plain => label.to_uppercase(),
            _ => label.to_string(),
        }
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "list" => Ok(TableStyle::Plain),
            "rounded" => Ok(TableStyle::Rounded),
            "separated" | "rounded-separated" => Ok(TableStyle::Separated),
            other => Err(Error::UnknownStyle(other.to_string())),
        }
    }
}

/// Lenient style lookup: unknown names fall back to [`TableStyle::Rounded`].
pub fn style_for(name: &str) -> TableStyle {
    name.parse().unwrap_or_else(|_| {
        debug!(style = %name, "unknown table style, using rounded");
        TableStyle::Rounded
    })
}

/// How list output is presented when no explicit style is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Borderless columns for scripting.
    List,
    #[default]
    Table,
}

impl OutputMode {
    /// Style for this mode; a table with merged cells gets row separators.
    pub fn style(self, grouped: bool) -> TableStyle {
        match (self, grouped) {
            (OutputMode::List, _) => TableStyle::Plain,
            (OutputMode::Table, true) => TableStyle::Separated,
            (OutputMode::Table, false) => TableStyle::Rounded,
        }
    }
}

/// Semantic class of a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    Success,
    Error,
    Warning,
    Info,
}

impl ColorClass {
    pub fn color(self) -> Color {
        match self {
            ColorClass::Success => Color::Green,
            ColorClass::Error => Color::Red,
            ColorClass::Warning => Color::Yellow,
            ColorClass::Info => Color::Blue,
        }
    }
}

/// Classify a lifecycle or health status string.
///
/// Matching ignores case, and `-` and `_` are interchangeable.
pub fn status_class(value: &str) -> Option<ColorClass> {
    let key = value.trim().to_lowercase().replace('-', "_");
    let class = match key.as_str() {
        "100%" | "active" | "allow" | "available" | "attached" | "completed" | "healthy"
        | "in_use" | "inservice" | "running" | "create_complete" | "delete_complete"
        | "import_complete" | "import_rollback_complete" | "modify_complete"
        | "restore_complete" | "update_complete" => ColorClass::Success,
        "blackhole" | "deny" | "error" | "failed" | "deleted" | "deleting" | "shutting_down"
        | "stopped" | "terminated" | "unhealthy" | "create_failed" | "delete_failed"
        | "import_rollback_failed" | "modify_failed" | "restore_failed"
        | "rollback_complete" | "rollback_failed" | "update_rollback_complete"
        | "update_rollback_failed" | "update_rollback_in_progress" => ColorClass::Error,
        "creating" | "modifying" | "pending" | "rebooting" | "stopping" | "upgrading"
        | "create_in_progress" | "import_in_progress" | "import_rollback_in_progress"
        | "modify_in_progress" | "restore_in_progress" | "rollback_in_progress" => {
            ColorClass::Warning
        }
        "update_in_progress" => ColorClass::Info,
        _ => return None,
    };
    Some(class)
}

/// Body cell for `value`, colored when it is a known status.
///
/// Styling rides on the cell rather than the text so column widths are
/// measured on the bare value.
pub fn colorize(value: &str) -> Cell {
    match status_class(value) {
        Some(class) => Cell::new(value).fg(class.color()),
        None => Cell::new(value),
    }
}

/// Bold header cell.
pub fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

/// Label cell for detail tables.
pub fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Blue).add_attribute(Attribute::Bold)
}
