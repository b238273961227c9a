//! Declarative table rendering for heterogeneous resource records.
//!
//! A caller describes each record kind once as a static slice of [`Field`]s and
//! a [`KindTable`] of getters. Per invocation it applies a [`ColumnSelection`],
//! builds [`RenderOptions`], and asks either renderer for text:
//!
//! - [`render_list`]: header row plus one row per record, with tag columns,
//!   empty-column suppression and natural sorting.
//! - [`render_detail`]: a single record split into category sections under a
//!   vertical, horizontal or grid [`Layout`].
//!
//! Both renderers also expose their intermediate model ([`build_list`],
//! [`build_detail`]) so structure can be inspected without parsing text.

pub mod detail;
pub mod error;
pub mod field;
pub mod list;
pub mod options;
pub mod resolve;
pub mod sort;
pub mod style;

pub use detail::{
    build_detail, render_detail, render_detail_table, DetailCell, DetailRow, DetailTable, Layout,
    MAX_COLUMNS_PER_ROW,
};
pub use error::{Error, Result};
pub use field::{ColumnSelection, Field, SortDirection, TAGS_CATEGORY};
pub use list::{build_list, render_list, render_list_table, Column, ColumnSource, ListTable};
pub use options::RenderOptions;
pub use resolve::{AttributeResolver, KindTable, KindTableBuilder, Record, Registry, Tag};
pub use sort::{compare_natural, resolve_sort, SortKey};
pub use style::{colorize, status_class, style_for, ColorClass, OutputMode, TableStyle};
