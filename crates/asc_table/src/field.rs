//! Field schema: declarative description of the displayable attributes of a record kind.
//!
//! Schemas are `static` slices of [`Field`] built with the `const` constructors
//! below. A render call never mutates a schema; it takes a copy through
//! [`ColumnSelection::apply`], which folds in the caller's visibility overrides
//! and sort requests.

use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// Category that marks the field standing in for every dynamically-named tag column.
pub const TAGS_CATEGORY: &str = "Tags";

/// Ordering applied when a field is the active sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result.
    pub fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

/// One displayable attribute of a record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Groups fields into detail-table sections. Ignored by list tables.
    pub category: &'static str,
    /// Display label and resolver lookup key.
    pub name: &'static str,
    pub visible: bool,
    /// Position of this field in the caller's sort requests; `Some` means requested.
    pub sort_rank: Option<usize>,
    /// Fallback ordering field when nothing is explicitly requested.
    pub default_sort: bool,
    pub sort_direction: SortDirection,
    /// Pseudo-field that opens a new visual section instead of holding a value.
    pub section_header: bool,
    /// Adjacent identical cells in this column merge visually.
    pub merge: bool,
}

impl Field {
    /// A visible, unsorted value field.
    pub const fn new(category: &'static str, name: &'static str) -> Self {
        Self {
            category,
            name,
            visible: true,
            sort_rank: None,
            default_sort: false,
            sort_direction: SortDirection::Ascending,
            section_header: false,
            merge: false,
        }
    }

    /// A section-break pseudo-field titled `title`.
    pub const fn header(category: &'static str, title: &'static str) -> Self {
        let mut field = Self::new(category, title);
        field.section_header = true;
        field
    }

    /// The single field representing the record's tag collection.
    pub const fn tags() -> Self {
        Self::new(TAGS_CATEGORY, TAGS_CATEGORY)
    }

    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub const fn default_sort(mut self) -> Self {
        self.default_sort = true;
        self
    }

    pub const fn descending(mut self) -> Self {
        self.sort_direction = SortDirection::Descending;
        self
    }

    pub const fn merged(mut self) -> Self {
        self.merge = true;
        self
    }

    pub fn is_sort_requested(&self) -> bool {
        self.sort_rank.is_some()
    }

    pub fn is_tags(&self) -> bool {
        self.category == TAGS_CATEGORY
    }

    /// Loose name match used for command-line selectors.
    ///
    /// Case and punctuation are ignored, so `instance-type`, `InstanceType` and
    /// `Instance Type` all select the same field.
    pub fn is_named(&self, query: &str) -> bool {
        normalize(self.name) == normalize(query)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Visibility overrides and ordered sort requests supplied by the CLI layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelection {
    /// Fields to force visible.
    pub show: Vec<String>,
    /// Fields to force hidden. Wins over `show`.
    pub hide: Vec<String>,
    /// Fields to sort by, in the order the flags appeared.
    pub sort: Vec<String>,
}

impl ColumnSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(mut self, name: impl Into<String>) -> Self {
        self.show.push(name.into());
        self
    }

    pub fn hide(mut self, name: impl Into<String>) -> Self {
        self.hide.push(name.into());
        self
    }

    pub fn sort_by(mut self, name: impl Into<String>) -> Self {
        self.sort.push(name.into());
        self
    }

    /// Produce the per-call field list for `schema`.
    pub fn apply(&self, schema: &[Field]) -> Vec<Field> {
        for name in self.show.iter().chain(&self.hide).chain(&self.sort) {
            if !schema.iter().any(|f| f.is_named(name)) {
                debug!(field = %name, "ignoring selector for unknown field");
            }
        }

        schema
            .iter()
            .map(|field| {
                let mut field = *field;
                if self.show.iter().any(|n| field.is_named(n)) {
                    field.visible = true;
                }
                if self.hide.iter().any(|n| field.is_named(n)) {
                    field.visible = false;
                }
                if let Some(rank) = self.sort.iter().position(|n| field.is_named(n)) {
                    field.sort_rank = Some(rank);
                }
                field
            })
            .collect()
    }
}
