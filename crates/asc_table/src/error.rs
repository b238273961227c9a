//! Error types for the rendering engine.

use crate::detail::Layout;
use thiserror::Error;

/// Rendering result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Rendering and attribute-resolution errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The resolver has no getter table for the record's kind.
    #[error("no attribute table registered for kind '{kind}'")]
    UnknownKind { kind: String },

    /// The kind's getter table has no entry for the requested field.
    #[error("field '{field}' not found for kind '{kind}'")]
    FieldNotFound { field: String, kind: String },

    /// The caller passed an empty field schema.
    #[error("cannot render table: no fields defined")]
    NoFieldsDefined,

    /// Every field was hidden, so there is nothing to lay out.
    #[error("cannot render table: no columns defined (are all fields hidden?)")]
    NoHeadersDefined,

    /// Horizontal and grid layouts need at least one slot per row.
    #[error("{layout} layout requires a positive columns-per-row count")]
    ColumnsPerRowZero { layout: Layout },

    /// More slots per row than a table can hold.
    #[error("{layout} layout supports at most {max} columns per row, got {columns}")]
    ColumnsPerRowTooLarge {
        layout: Layout,
        columns: usize,
        max: usize,
    },

    /// Layout selector did not name a known layout.
    #[error("unknown layout '{0}' (expected vertical, horizontal or grid)")]
    UnknownLayout(String),

    /// Style selector did not name a known box style.
    #[error("unknown table style '{0}' (expected rounded, separated or plain)")]
    UnknownStyle(String),
}

impl Error {
    /// Create an unknown kind error.
    pub fn unknown_kind(kind: impl ToString) -> Self {
        Self::UnknownKind {
            kind: kind.to_string(),
        }
    }

    /// Create a field not found error.
    pub fn field_not_found(field: impl Into<String>, kind: impl ToString) -> Self {
        Self::FieldNotFound {
            field: field.into(),
            kind: kind.to_string(),
        }
    }

    /// Whether rendering can continue past this error.
    ///
    /// Only a missing field is recovered, and only at the cell that asked for it.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::FieldNotFound { .. })
    }
}
